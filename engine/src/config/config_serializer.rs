use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BotType, FirstPlayerMode, Mark};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct GameSection {
        first_player: FirstPlayerMode,
        ai_mark: Mark,
        bot_type: BotType,
    }

    #[test]
    fn test_enums_are_written_by_variant_name() {
        let section = GameSection {
            first_player: FirstPlayerMode::Ai,
            ai_mark: Mark::O,
            bot_type: BotType::Minimax,
        };
        let yaml = YamlConfigSerializer::new().serialize(&section).unwrap();
        assert!(yaml.contains("first_player: Ai"));
        assert!(yaml.contains("ai_mark: O"));
        assert!(yaml.contains("bot_type: Minimax"));
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let result: Result<GameSection, String> = YamlConfigSerializer::new()
            .deserialize("first_player: Nobody\nai_mark: X\nbot_type: Minimax\n");
        let err = result.unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"));
    }
}
