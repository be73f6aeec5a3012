/// Remote names as printed by `git remote`, split on any whitespace.
pub fn parse_remote_list(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::parse_remote_list;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_space_separated_remotes() {
        assert_eq!(parse_remote_list("origin upstream\n"), vec!["origin", "upstream"]);
    }

    #[test]
    fn parse_one_remote_per_line() {
        assert_eq!(
            parse_remote_list("origin\nupstream\nfork\n"),
            vec!["origin", "upstream", "fork"]
        );
    }

    #[test]
    fn parse_no_remotes() {
        assert!(parse_remote_list("\n").is_empty());
    }
}
