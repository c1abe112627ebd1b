use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TacticalPlan {
    pub recommended_formation: String,
    pub tactical_explanation: String,
    pub detailed_tactics: DetailedTactics,
    pub key_player: KeyPlayer,
    pub visual_assets: VisualAssets,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailedTactics {
    pub attacking_style: String,
    pub defensive_style: String,
    pub tempo: String,
    pub key_instruction: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyPlayer {
    pub name: String,
    pub description: String,
}

impl KeyPlayer {
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualAssets {
    pub formation_image: String,
    pub player_image: String,
}
