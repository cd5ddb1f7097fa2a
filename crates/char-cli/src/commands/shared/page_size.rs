use char_views::listing::DEFAULT_PAGE_SIZE;

/// Effective page size with precedence: command arg -> config -> built-in default.
///
/// Zero from any layer falls through to the next.
#[must_use]
pub fn effective_page_size(local: Option<u32>, configured: Option<u32>) -> u32 {
    local
        .filter(|size| *size > 0)
        .or(configured.filter(|size| *size > 0))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::effective_page_size;

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_page_size(Some(5), Some(10)), 5);
    }

    #[test]
    fn configured_used_when_local_missing() {
        assert_eq!(effective_page_size(None, Some(10)), 10);
    }

    #[test]
    fn default_used_when_none_set() {
        assert_eq!(effective_page_size(None, None), 12);
    }

    #[test]
    fn zero_falls_through() {
        assert_eq!(effective_page_size(Some(0), Some(8)), 8);
    }
}
