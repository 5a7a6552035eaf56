    use super::*;

    fn specs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn names_hex_indices_and_attributes() {
        let style = parse_style(&specs(&["green", "bold"]), false);
        assert_eq!(style.fg, Some(Color::Green));
        assert!(style.add_modifier.contains(Modifier::BOLD));

        let style = parse_style(&specs(&["#ff8000"]), true);
        assert_eq!(style.bg, Some(Color::Rgb(255, 128, 0)));
        assert_eq!(style.fg, None);

        let style = parse_style(&specs(&["208", "Underline"]), false);
        assert_eq!(style.fg, Some(Color::Indexed(208)));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn unknown_entries_are_ignored() {
        let style = parse_style(&specs(&["chartreuse", "#12", "blink"]), false);
        assert_eq!(style, Style::default());
    }

    #[test]
    fn icons_follow_nerd_font_version() {
        let ascii = Icons::from_config(&IconConfig::default());
        assert_eq!(ascii.expanded, "v ");
        assert_eq!(ascii.collapsed, "> ");
        assert_eq!(ascii.document, "");

        let nerd = Icons::from_config(&IconConfig {
            nerd_fonts_version: "3".to_string(),
        });
        assert!(!nerd.document.is_empty());
    }
