//! Validation utilities for tenant/organization data
//!
//! The boolean validators are total: empty or malformed input is simply
//! invalid. [`validate_new_organization`] wraps them for create flows that
//! want a typed error.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ValidationError, ValidationResult};

/// Length bounds and pattern for a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraints {
    /// Minimum length in UTF-16 code units
    pub min_length: usize,

    /// Maximum length in UTF-16 code units
    pub max_length: usize,

    /// Regex the value must match, if any
    pub pattern: Option<&'static str>,
}

/// Organization slug constraints.
///
/// The pattern makes the middle-and-end group optional, so a single
/// alphanumeric character also matches despite `min_length` being 3.
pub const ORGANIZATION_SLUG_CONSTRAINTS: FieldConstraints = FieldConstraints {
    min_length: 3,
    max_length: 50,
    pattern: Some(r"^[a-z0-9]([a-z0-9-]{1,48}[a-z0-9])?$"),
};

/// Organization name constraints (applied to the trimmed name).
pub const ORGANIZATION_NAME_CONSTRAINTS: FieldConstraints = FieldConstraints {
    min_length: 1,
    max_length: 100,
    pattern: None,
};

/// Words that cannot be used as organization slugs.
pub const RESERVED_SLUGS: [&str; 21] = [
    "admin",
    "api",
    "app",
    "auth",
    "billing",
    "dashboard",
    "docs",
    "help",
    "home",
    "login",
    "logout",
    "new",
    "null",
    "pricing",
    "register",
    "settings",
    "signup",
    "support",
    "terms",
    "undefined",
    "www",
];

// ═══════════════════════════════════════════════════════════════════════════════
// Whitespace
// ═══════════════════════════════════════════════════════════════════════════════

/// Whitespace as JavaScript clients see it (`\s`, `String.prototype.trim`).
///
/// Unlike Unicode White_Space this includes U+FEFF and excludes U+0085, so
/// stored names and slugs validate the same on both sides.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

fn is_client_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim_client_whitespace(s: &str) -> &str {
    s.trim_matches(is_client_whitespace)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Pre-compiled Regex Patterns
// ═══════════════════════════════════════════════════════════════════════════════

static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]{1,48}[a-z0-9])?$").expect("Invalid slug regex")
});

static ROLE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]{1,50}$").expect("Invalid role name regex"));

/// Coarse syntactic email check; not RFC 5322 complete.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let local = format!("[^{WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{local}@{local}\.{local}$")).expect("Invalid email regex")
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{WHITESPACE_CLASS}]+")).expect("Invalid whitespace regex")
});

static INVALID_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("Invalid slug charset regex"));

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("Invalid hyphen regex"));

/// Validate organization slug format.
///
/// Lowercase alphanumerics and hyphens, starting and ending alphanumeric.
///
/// # Examples
///
/// ```
/// use tenant_org::validate_organization_slug;
///
/// assert!(validate_organization_slug("my-org-1"));
/// assert!(!validate_organization_slug("ab"));
/// assert!(!validate_organization_slug("My-Org"));
/// assert!(!validate_organization_slug("-org"));
/// ```
pub fn validate_organization_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Validate organization name.
///
/// The trimmed name must be 1-100 UTF-16 code units long, so characters
/// outside the Basic Multilingual Plane count twice.
pub fn validate_organization_name(name: &str) -> bool {
    let length = trim_client_whitespace(name).encode_utf16().count();
    (ORGANIZATION_NAME_CONSTRAINTS.min_length..=ORGANIZATION_NAME_CONSTRAINTS.max_length)
        .contains(&length)
}

/// Validate role name format.
///
/// Lowercase alphanumerics and underscores, 1-50 characters.
pub fn validate_role_name(role_name: &str) -> bool {
    ROLE_NAME_REGEX.is_match(role_name)
}

/// Validate email format.
///
/// # Examples
///
/// ```
/// use tenant_org::validate_email;
///
/// assert!(validate_email("a@b.co"));
/// assert!(!validate_email("not-an-email"));
/// ```
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Normalize free text into an organization slug.
///
/// Steps, in order: lowercase, trim, whitespace runs to `-`, drop characters
/// outside `[a-z0-9-]`, collapse repeated hyphens, strip a leading and a
/// trailing hyphen. The result is not guaranteed to pass
/// [`validate_organization_slug`] (it may be empty or too short).
///
/// # Examples
///
/// ```
/// use tenant_org::normalize_organization_slug;
///
/// assert_eq!(normalize_organization_slug("  My Org!! "), "my-org");
/// assert_eq!(normalize_organization_slug("Acme -- Corp"), "acme-corp");
/// ```
pub fn normalize_organization_slug(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(trim_client_whitespace(&lowered), "-");
    let stripped = INVALID_SLUG_CHARS.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&stripped, "-");

    let slug = collapsed.strip_prefix('-').unwrap_or(&collapsed);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}

/// Check if a slug is reserved (case-insensitive).
///
/// # Examples
///
/// ```
/// use tenant_org::is_reserved_slug;
///
/// assert!(is_reserved_slug("Admin"));
/// assert!(!is_reserved_slug("acme"));
/// ```
pub fn is_reserved_slug(slug: &str) -> bool {
    let lowered = slug.to_lowercase();
    RESERVED_SLUGS.contains(&lowered.as_str())
}

/// Validate the identifying fields of a new organization.
///
/// Checks the name, then the slug format, then the reserved word list.
///
/// # Errors
///
/// The first failing check, as a [`ValidationError`]
///
/// # Examples
///
/// ```
/// use tenant_org::{validate_new_organization, ValidationError};
///
/// assert!(validate_new_organization("Acme Corp", "acme-corp").is_ok());
/// assert_eq!(
///     validate_new_organization("Acme Corp", "admin"),
///     Err(ValidationError::ReservedSlug("admin".to_string()))
/// );
/// ```
pub fn validate_new_organization(name: &str, slug: &str) -> ValidationResult<()> {
    if !validate_organization_name(name) {
        return Err(ValidationError::InvalidName);
    }
    if !validate_organization_slug(slug) {
        return Err(ValidationError::InvalidSlug(slug.to_string()));
    }
    if is_reserved_slug(slug) {
        return Err(ValidationError::ReservedSlug(slug.to_string()));
    }
    Ok(())
}

/// Validate a custom role name, returning a typed error.
///
/// # Errors
///
/// [`ValidationError::InvalidRoleName`] if the name does not match the pattern
pub fn ensure_role_name(role_name: &str) -> ValidationResult<()> {
    if validate_role_name(role_name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidRoleName(role_name.to_string()))
    }
}

/// Validate an invitee email, returning a typed error.
///
/// # Errors
///
/// [`ValidationError::InvalidEmail`] if the address is not syntactically valid
pub fn ensure_email(email: &str) -> ValidationResult<()> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_pattern_constant_matches_regex() {
        assert_eq!(
            ORGANIZATION_SLUG_CONSTRAINTS.pattern,
            Some(SLUG_REGEX.as_str())
        );
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_organization_slug("my-org-1"));
        assert!(validate_organization_slug("abc"));
        assert!(validate_organization_slug("a-b"));
        assert!(!validate_organization_slug("ab"));
        assert!(!validate_organization_slug("My-Org"));
        assert!(!validate_organization_slug("my_org"));
        assert!(!validate_organization_slug("org-"));
        assert!(!validate_organization_slug("-org"));
        assert!(!validate_organization_slug(""));
    }

    #[test]
    fn test_validate_slug_length_bounds() {
        let max = "a".repeat(50);
        let too_long = "a".repeat(51);
        assert!(validate_organization_slug(&max));
        assert!(!validate_organization_slug(&too_long));
    }

    #[test]
    fn test_single_character_slug_is_accepted_by_pattern() {
        // The pattern, not MIN_LENGTH, is authoritative: one character passes.
        assert!(validate_organization_slug("a"));
        assert!(validate_organization_slug("7"));
        assert_eq!(ORGANIZATION_SLUG_CONSTRAINTS.min_length, 3);
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_organization_name("Acme"));
        assert!(validate_organization_name("  A  "));
        assert!(!validate_organization_name(""));
        assert!(!validate_organization_name("   "));
        assert!(validate_organization_name(&"x".repeat(100)));
        assert!(!validate_organization_name(&"x".repeat(101)));
        // Surrounding whitespace does not count toward the limit
        assert!(validate_organization_name(&format!("  {}  ", "x".repeat(100))));
    }

    #[test]
    fn test_validate_name_counts_utf16_units() {
        // Each emoji is a surrogate pair
        assert!(validate_organization_name(&"😀".repeat(50)));
        assert!(!validate_organization_name(&"😀".repeat(51)));
        assert!(!validate_organization_name(&"😀".repeat(60)));
        assert!(validate_organization_name(&"é".repeat(100)));
    }

    #[test]
    fn test_validate_name_trims_client_whitespace() {
        assert!(!validate_organization_name("\u{FEFF}"));
        assert!(!validate_organization_name("\u{3000}\u{A0}"));
        assert!(validate_organization_name("\u{85}"));
    }

    #[test]
    fn test_validate_role_name() {
        assert!(validate_role_name("billing_clerk"));
        assert!(validate_role_name("r2"));
        assert!(!validate_role_name("Billing"));
        assert!(!validate_role_name("billing-clerk"));
        assert!(!validate_role_name(""));
        assert!(validate_role_name(&"a".repeat(50)));
        assert!(!validate_role_name(&"a".repeat(51)));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last+tag@sub.example.com"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_email_whitespace_set() {
        assert!(validate_email("a\u{85}b@c.co"));
        assert!(!validate_email("a\u{FEFF}b@c.co"));
        assert!(!validate_email("a\u{A0}b@c.co"));
        assert!(!validate_email("ops@acme\tcorp.io"));
    }

    #[test]
    fn test_normalize_slug_whitespace_set() {
        assert_eq!(normalize_organization_slug("a\u{FEFF}b"), "a-b");
        assert_eq!(normalize_organization_slug("\u{FEFF}acme\u{3000}"), "acme");
        assert_eq!(normalize_organization_slug("a\u{85}b"), "ab");
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_organization_slug("  My Org!! "), "my-org");
        assert_eq!(normalize_organization_slug("Hello   World"), "hello-world");
        assert_eq!(normalize_organization_slug("--Acme--"), "acme");
        assert_eq!(normalize_organization_slug("a - b"), "a-b");
        assert_eq!(normalize_organization_slug("Café Zürich"), "caf-zrich");
        assert_eq!(normalize_organization_slug("!!!"), "");
        assert_eq!(normalize_organization_slug(""), "");
    }

    #[test]
    fn test_normalize_slug_strips_after_character_removal() {
        // "!" between spaces leaves "-" runs that must be collapsed and trimmed
        assert_eq!(normalize_organization_slug("! acme !"), "acme");
    }

    #[test]
    fn test_reserved_slugs() {
        assert_eq!(RESERVED_SLUGS.len(), 21);
        assert!(is_reserved_slug("admin"));
        assert!(is_reserved_slug("Admin"));
        assert!(is_reserved_slug("WWW"));
        assert!(!is_reserved_slug("administrator"));
        assert!(!is_reserved_slug(""));
    }

    #[test]
    fn test_validate_new_organization() {
        assert_eq!(validate_new_organization("Acme", "acme"), Ok(()));
        assert_eq!(
            validate_new_organization("", "acme"),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            validate_new_organization("Acme", "Acme"),
            Err(ValidationError::InvalidSlug("Acme".to_string()))
        );
        assert_eq!(
            validate_new_organization("Support", "support"),
            Err(ValidationError::ReservedSlug("support".to_string()))
        );
    }

    #[test]
    fn test_ensure_helpers() {
        assert!(ensure_role_name("editor").is_ok());
        assert_eq!(
            ensure_role_name("Editor").map_err(|e| e.error_code()),
            Err("INVALID_ROLE_NAME")
        );
        assert!(ensure_email("ops@acme.io").is_ok());
        assert!(ensure_email("ops@acme").is_err());
    }
}
