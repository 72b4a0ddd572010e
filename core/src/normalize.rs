//! String normalization rules for slugs and comma-joined selections.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

const ENS_SUFFIX: &str = ".eth";

/// Derive a slug from an ENS name or address.
///
/// Trims and lowercases, strips a trailing `.eth`, replaces anything outside
/// `[a-z0-9-]` with `-`, collapses hyphen runs and trims edge hyphens.
///
/// ```
/// use paypage::derive_slug;
///
/// assert_eq!(derive_slug("Vitalik.ETH"), "vitalik");
/// assert_eq!(derive_slug("0x1234_ABCD!"), "0x1234-abcd");
/// ```
pub fn derive_slug(recipient: &str) -> String {
    let lower = recipient.trim().to_lowercase();
    let stem = lower.strip_suffix(ENS_SUFFIX).unwrap_or(&lower);
    normalize_slug(stem)
}

/// Bring arbitrary text into slug form without touching `.eth`.
pub fn normalize_slug(input: &str) -> String {
    let replaced = sanitize_slug_input(input);
    let collapsed = HYPHEN_RUNS.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}

/// Keystroke-level cleanup: lowercase and replace foreign characters.
///
/// Hyphen runs and edge hyphens are left alone so the user can keep typing;
/// [`normalize_slug`] finishes the job at submit time.
pub fn sanitize_slug_input(input: &str) -> String {
    NON_SLUG_CHARS.replace_all(&input.to_lowercase(), "-").into_owned()
}

/// Members of a comma-joined set, in order, blanks skipped.
pub fn set_members(current: &str) -> Vec<&str> {
    current.split(',').filter(|m| !m.is_empty()).collect()
}

/// Add `member` to the comma-joined set if absent, otherwise remove it.
///
/// Existing members keep their order; duplicates and blanks are dropped.
///
/// ```
/// use paypage::toggle_set_member;
///
/// assert_eq!(toggle_set_member("USDC,DAI", "DAI"), "USDC");
/// assert_eq!(toggle_set_member("USDC", "DAI"), "USDC,DAI");
/// ```
pub fn toggle_set_member(current: &str, member: &str) -> String {
    let mut members: Vec<&str> = Vec::new();
    for m in set_members(current) {
        if !members.contains(&m) {
            members.push(m);
        }
    }

    if let Some(pos) = members.iter().position(|m| *m == member) {
        members.remove(pos);
    } else if !member.is_empty() {
        members.push(member);
    }

    members.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_slug_examples() {
        assert_eq!(derive_slug("Vitalik.ETH"), "vitalik");
        assert_eq!(derive_slug("0x1234_ABCD!"), "0x1234-abcd");
        assert_eq!(derive_slug("  --Hello  World--  "), "hello-world");
        assert_eq!(derive_slug(""), "");
    }

    #[test]
    fn test_derive_slug_only_strips_suffix() {
        assert_eq!(derive_slug("my.eth.name"), "my-eth-name");
        assert_eq!(derive_slug("sub.vitalik.eth"), "sub-vitalik");
        assert_eq!(derive_slug("vitalik.eth "), "vitalik");
        assert_eq!(derive_slug("\tAlice.ETH\n"), "alice");
    }

    #[test]
    fn test_derive_slug_idempotent() {
        let inputs = [
            "Vitalik.ETH",
            "0x1234_ABCD!",
            "éàü.eth",
            "a--b__c",
            "İstanbul",
            "---",
            "foo.eth.eth",
            "x-eth",
        ];
        for s in inputs {
            let once = derive_slug(s);
            assert_eq!(derive_slug(&once), once, "input {:?}", s);
            assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn test_sanitize_keeps_hyphens_while_typing() {
        assert_eq!(sanitize_slug_input("My Page-"), "my-page-");
        assert_eq!(normalize_slug("my-page-"), "my-page");
    }

    #[test]
    fn test_normalize_slug_edges() {
        assert_eq!(normalize_slug("alice-2"), "alice-2");
        assert_eq!(normalize_slug("-alice"), "alice");
        assert_eq!(normalize_slug("a--b"), "a-b");
        assert_eq!(normalize_slug("--"), "");
    }

    #[test]
    fn test_toggle_set_member() {
        assert_eq!(toggle_set_member("USDC,DAI", "DAI"), "USDC");
        assert_eq!(toggle_set_member("USDC", "DAI"), "USDC,DAI");
        assert_eq!(toggle_set_member("", "DAI"), "DAI");
        assert_eq!(toggle_set_member("DAI", "DAI"), "");
    }

    #[test]
    fn test_toggle_keeps_order_and_dedups() {
        assert_eq!(toggle_set_member("USDT,USDC,DAI", "USDC"), "USDT,DAI");
        assert_eq!(toggle_set_member("USDC,,USDC,DAI", "USDT"), "USDC,DAI,USDT");
    }
}
