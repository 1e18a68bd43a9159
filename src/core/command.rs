//! Command parser for the : command palette

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Dashboard,
    Orders,
    Go(String),

    // Shell flags
    Theme,
    ToggleLeft,
    ToggleRight,
    // true collapses the panel
    SetLeft(bool),
    SetRight(bool),

    // Sidebar
    Select(String),
    Group(String),

    // Orders table, 1-based page number
    Page(usize),
    Filter(Option<String>),

    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "dashboard" | "dash" | "home" => Command::Dashboard,
        "orders" | "ord" => Command::Orders,
        "go" | "open" => match args {
            Some(path) => Command::Go(path),
            None => Command::Unknown(input.to_string()),
        },

        // Flags
        "theme" | "dark" | "light" => Command::Theme,
        "left" | "sidebar" => match args.as_deref().map(parse_visibility) {
            None => Command::ToggleLeft,
            Some(Some(collapsed)) => Command::SetLeft(collapsed),
            Some(None) => Command::Unknown(input.to_string()),
        },
        "right" | "panel" | "notifications" => match args.as_deref().map(parse_visibility) {
            None => Command::ToggleRight,
            Some(Some(collapsed)) => Command::SetRight(collapsed),
            Some(None) => Command::Unknown(input.to_string()),
        },

        // Sidebar
        "select" | "sel" => match args {
            Some(label) => Command::Select(label),
            None => Command::Unknown(input.to_string()),
        },
        "group" | "expand" => match args {
            Some(label) => Command::Group(label),
            None => Command::Unknown(input.to_string()),
        },

        // Orders
        "page" | "p" => match args.and_then(|s| s.parse::<usize>().ok()) {
            Some(n) if n > 0 => Command::Page(n),
            _ => Command::Unknown(input.to_string()),
        },
        "filter" | "search" | "find" => Command::Filter(args),

        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

/// `hide` collapses a panel, `show` expands it.
fn parse_visibility(arg: &str) -> Option<bool> {
    match arg.to_lowercase().as_str() {
        "hide" | "off" | "collapse" => Some(true),
        "show" | "on" | "open" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("dashboard"), Command::Dashboard);
        assert_eq!(parse_command("orders"), Command::Orders);
        assert_eq!(
            parse_command("go /orders"),
            Command::Go("/orders".to_string())
        );
        assert_eq!(parse_command("go"), Command::Unknown("go".to_string()));
    }

    #[test]
    fn test_parse_flag_commands() {
        assert_eq!(parse_command("theme"), Command::Theme);
        assert_eq!(parse_command("LEFT"), Command::ToggleLeft);
        assert_eq!(parse_command("right"), Command::ToggleRight);
        assert_eq!(parse_command("left hide"), Command::SetLeft(true));
        assert_eq!(parse_command("sidebar SHOW"), Command::SetLeft(false));
        assert_eq!(parse_command("right off"), Command::SetRight(true));
        assert_eq!(
            parse_command("left maybe"),
            Command::Unknown("left maybe".to_string())
        );
    }

    #[test]
    fn test_parse_sidebar_commands() {
        assert_eq!(
            parse_command("select Online Courses"),
            Command::Select("Online Courses".to_string())
        );
        assert_eq!(
            parse_command("group Blog"),
            Command::Group("Blog".to_string())
        );
    }

    #[test]
    fn test_parse_page_commands() {
        assert_eq!(parse_command("page 2"), Command::Page(2));
        assert_eq!(
            parse_command("page 0"),
            Command::Unknown("page 0".to_string())
        );
        assert_eq!(
            parse_command("page two"),
            Command::Unknown("page two".to_string())
        );
        assert_eq!(
            parse_command("filter status:approved"),
            Command::Filter(Some("status:approved".to_string()))
        );
        assert_eq!(parse_command("filter"), Command::Filter(None));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
