use anyhow::Context;
use chessboard_ui::config::BoardConfig;


pub fn read_board_config(filename: &str) -> anyhow::Result<BoardConfig> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Reading config file {filename}"))?;
    parse_board_config(&contents).with_context(|| format!("Parsing config file {filename}"))
}

fn parse_board_config(contents: &str) -> Result<BoardConfig, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}


#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chessboard_ui::display::BoardOrientation;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn yaml_config() {
        let config = parse_board_config(indoc! {"
            orientation: Rotated
            animation_duration: 1s
            palette:
              annotation: red
        "})
        .unwrap();
        assert_eq!(config.orientation, BoardOrientation::Rotated);
        assert_eq!(config.animation_duration, Duration::from_secs(1));
        assert_eq!(config.palette.annotation, "red");
        assert_eq!(config.palette.selection, "rgba(255, 255, 0, 0.4)");
        assert!(config.allow_drag);
    }

    #[test]
    fn unknown_orientation() {
        assert!(parse_board_config("orientation: Sideways").is_err());
    }
}
