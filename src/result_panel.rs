use sakusen_core::TacticalPlan;
use web_sys::{Element, HtmlImageElement};

pub(crate) struct ResultPanel {
    formation: Element,
    explanation: Element,
    tactic_attack: Element,
    tactic_defense: Element,
    tactic_tempo: Element,
    tactic_instruction: Element,
    player_name: Element,
    player_desc: Element,
    formation_image: HtmlImageElement,
    player_image: HtmlImageElement,
}

impl ResultPanel {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        formation: Element,
        explanation: Element,
        tactic_attack: Element,
        tactic_defense: Element,
        tactic_tempo: Element,
        tactic_instruction: Element,
        player_name: Element,
        player_desc: Element,
        formation_image: HtmlImageElement,
        player_image: HtmlImageElement,
    ) -> Self {
        Self {
            formation,
            explanation,
            tactic_attack,
            tactic_defense,
            tactic_tempo,
            tactic_instruction,
            player_name,
            player_desc,
            formation_image,
            player_image,
        }
    }

    // Assigning the formation image src is what the reveal gate waits on, so
    // render must run before the gate is armed.
    pub(crate) fn render(&self, plan: &TacticalPlan) {
        self.formation
            .set_text_content(Some(&plan.recommended_formation));
        self.explanation
            .set_text_content(Some(&plan.tactical_explanation));
        self.tactic_attack
            .set_text_content(Some(&plan.detailed_tactics.attacking_style));
        self.tactic_defense
            .set_text_content(Some(&plan.detailed_tactics.defensive_style));
        self.tactic_tempo
            .set_text_content(Some(&plan.detailed_tactics.tempo));
        self.tactic_instruction
            .set_text_content(Some(&plan.detailed_tactics.key_instruction));
        self.player_name
            .set_text_content(Some(&plan.key_player.display_name()));
        self.player_desc
            .set_text_content(Some(&plan.key_player.description));
        self.formation_image
            .set_src(&plan.visual_assets.formation_image);
        self.player_image.set_src(&plan.visual_assets.player_image);
    }
}
