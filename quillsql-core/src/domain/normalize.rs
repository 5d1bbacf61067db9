// quillsql-core/src/domain/normalize.rs

//! Turns a conversational model reply into a bare SQL statement.

const LANG_FENCE: &str = "```sql";
const BARE_FENCE: &str = "```";

/// Strip markdown code fences and surrounding whitespace from a model reply.
///
/// A language-tagged opening fence is checked before a bare one; the closing
/// fence is checked independently of which opening fence matched. The strip is
/// repeated until the text stops changing, so the result never starts or ends
/// with a fence and `normalize_sql(normalize_sql(r)) == normalize_sql(r)`.
pub fn normalize_sql(raw: &str) -> String {
    let mut current = raw.trim();
    loop {
        let next = strip_fence_pair(current);
        if next == current {
            return next.to_string();
        }
        current = next;
    }
}

fn strip_fence_pair(text: &str) -> &str {
    let text = text.trim();
    let body = text
        .strip_prefix(LANG_FENCE)
        .or_else(|| text.strip_prefix(BARE_FENCE))
        .unwrap_or(text);
    body.strip_suffix(BARE_FENCE).unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_reply_is_trimmed() {
        assert_eq!(normalize_sql("  SELECT 1;\n"), "SELECT 1;");
    }

    #[test]
    fn test_sql_fence_is_stripped() {
        let raw = "```sql\nSELECT name FROM users;\n```";
        assert_eq!(normalize_sql(raw), "SELECT name FROM users;");
    }

    #[test]
    fn test_bare_fence_is_stripped() {
        let raw = "```\nSELECT id\nFROM users\nWHERE id = 1;\n```\n";
        assert_eq!(normalize_sql(raw), "SELECT id\nFROM users\nWHERE id = 1;");
    }

    #[test]
    fn test_unbalanced_fences() {
        assert_eq!(normalize_sql("```sql\nSELECT 1"), "SELECT 1");
        assert_eq!(normalize_sql("SELECT 1\n```"), "SELECT 1");
        assert_eq!(normalize_sql("```"), "");
    }

    #[test]
    fn test_other_language_tag_is_left_in_place() {
        // Only the sql tag is recognised; a bare fence prefix leaves the tag.
        assert_eq!(normalize_sql("```postgres\nSELECT 1\n```"), "postgres\nSELECT 1");
    }

    #[test]
    fn test_nested_fences_reach_fixed_point() {
        let raw = "```sql\n```sql\nSELECT 1\n```\n```";
        let once = normalize_sql(raw);
        assert_eq!(once, "SELECT 1");
        assert_eq!(normalize_sql(&once), once);
    }

    proptest! {
        #[test]
        fn prop_unfenced_reply_equals_trim(body in "[A-Za-z0-9 ,;*()=<>'\n\t]{0,64}") {
            prop_assert_eq!(normalize_sql(&body), body.trim());
        }

        #[test]
        fn prop_sql_fence_yields_trimmed_body(body in "[A-Za-z0-9 ,;*()=<>'\n]{0,64}") {
            let raw = format!("```sql\n{}\n```", body);
            prop_assert_eq!(normalize_sql(&raw), body.trim());
        }

        #[test]
        fn prop_bare_fence_yields_trimmed_body(body in "[A-Za-z0-9 ,;*()=<>'\n]{0,64}") {
            let raw = format!("```\n{}\n```", body);
            prop_assert_eq!(normalize_sql(&raw), body.trim());
        }

        #[test]
        fn prop_normalization_is_idempotent(raw in "(```(sql)?)?[A-Za-z0-9 `;\n]{0,64}(```)?") {
            let once = normalize_sql(&raw);
            prop_assert_eq!(normalize_sql(&once), once.clone());
        }
    }
}
