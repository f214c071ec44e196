//! Fence selection for embedded file content.

/// Pick the shortest fence that cannot collide with `content`.
///
/// Three tiers: triple backtick, quadruple backtick, then tildes. The tilde
/// tier uses a distinct delimiter character, so it never collides with
/// backtick runs in well-formed text content.
pub fn choose_fence(content: &str) -> &'static str {
    if !content.contains("```") {
        "```"
    } else if !content.contains("````") {
        "````"
    } else {
        "~~~"
    }
}

#[cfg(test)]
mod tests {
    use super::choose_fence;

    #[test]
    fn plain_content_gets_the_shortest_fence() {
        assert_eq!(choose_fence("fn main() {}"), "```");
        assert_eq!(choose_fence(""), "```");
    }

    #[test]
    fn triple_backticks_escalate_to_quadruple() {
        assert_eq!(choose_fence("```rust\ncode\n```"), "````");
    }

    #[test]
    fn quadruple_backticks_escalate_to_tildes() {
        assert_eq!(choose_fence("````\n```\n````"), "~~~");
    }
}
