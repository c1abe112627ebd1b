pub mod plan;
pub mod response;

pub use plan::{DetailedTactics, KeyPlayer, TacticalPlan, VisualAssets};
pub use response::{
    interpret_response, rejection_alert, ResponseError, SubmitOutcome, CONNECT_FAILED_ALERT,
    PREDICT_ENDPOINT, UNKNOWN_ERROR_FALLBACK,
};
