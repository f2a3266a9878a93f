//! Team-site matching.
//!
//! A domain is treated as team-owned when it contains any word of the team
//! name. This is permissive: "boston" matches `visitboston.com` as well as
//! `bostonbruins.com`.

/// Whether `domain` looks like a property of `team_name`.
///
/// Case-insensitive substring match on each whitespace-separated word of the
/// team name. An empty domain never matches.
pub fn is_team_domain(domain: &str, team_name: &str) -> bool {
    let domain = domain.trim().to_lowercase();
    if domain.is_empty() {
        return false;
    }

    team_name
        .split_whitespace()
        .map(str::to_lowercase)
        .any(|word| domain.contains(&word))
}

/// 1-based position of the first team-owned domain in `domains`.
pub fn find_team_position<'a, I>(domains: I, team_name: &str) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    domains
        .into_iter()
        .position(|d| d.is_some_and(|d| is_team_domain(d, team_name)))
        .map(|idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_team_word() {
        assert!(is_team_domain("www.nhl.com/bruins", "Boston Bruins"));
        assert!(is_team_domain("BostonBruins.com", "Boston Bruins"));
    }

    #[test]
    fn test_no_match() {
        assert!(!is_team_domain("ticketmaster.com", "Boston Bruins"));
    }

    #[test]
    fn test_empty_domain_never_matches() {
        assert!(!is_team_domain("", "Boston Bruins"));
        assert!(!is_team_domain("   ", "Boston Bruins"));
    }

    #[test]
    fn test_permissive_substring() {
        // Known limitation: city words match unrelated sites.
        assert!(is_team_domain("visitboston.com", "Boston Bruins"));
    }

    #[test]
    fn test_find_team_position() {
        let domains = vec![
            Some("ticketmaster.com"),
            None,
            Some("stubhub.com"),
            Some("nhl.com/bruins"),
            Some("bruins.com"),
        ];
        assert_eq!(find_team_position(domains, "Boston Bruins"), Some(4));
    }

    #[test]
    fn test_find_team_position_absent() {
        let domains = vec![Some("espn.com"), Some("reddit.com")];
        assert_eq!(find_team_position(domains, "Boston Bruins"), None);
    }
}
