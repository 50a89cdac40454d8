use serde::Serialize;

use super::error::AppError;

/// 2 パスリライトの状態
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassState {
    Idle,
    Pass1Requested,
    Pass1Cleaned,
    Pass2Requested,
    Done,
    Failed { reason: String },
}

impl PassState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::Pass1Requested => "pass1_requested",
            Self::Pass1Cleaned => "pass1_cleaned",
            Self::Pass2Requested => "pass2_requested",
            Self::Done => "done",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed { .. })
    }
}

/// 状態遷移の記録
#[derive(Debug, Clone, Serialize)]
pub struct PassTransition {
    pub prev_state: String,
    pub new_state: PassState,
}

/// 1 回のリライト実行における状態管理
///
/// 失敗は生成呼び出し中（Pass1Requested / Pass2Requested）からのみ受け付ける。
#[derive(Debug)]
pub struct PassTracker {
    state: PassState,
    history: Vec<PassState>,
}

impl PassTracker {
    pub fn new() -> Self {
        Self {
            state: PassState::Idle,
            history: vec![PassState::Idle],
        }
    }

    pub fn state(&self) -> &PassState {
        &self.state
    }

    pub fn history(&self) -> &[PassState] {
        &self.history
    }

    pub fn into_history(self) -> Vec<PassState> {
        self.history
    }

    pub fn advance(&mut self, next: PassState) -> Result<PassTransition, AppError> {
        let allowed = matches!(
            (&self.state, &next),
            (PassState::Idle, PassState::Pass1Requested)
                | (PassState::Pass1Requested, PassState::Pass1Cleaned)
                | (PassState::Pass1Cleaned, PassState::Pass2Requested)
                | (PassState::Pass2Requested, PassState::Done)
                | (PassState::Pass1Requested, PassState::Failed { .. })
                | (PassState::Pass2Requested, PassState::Failed { .. })
        );

        if !allowed {
            return Err(AppError::internal(format!(
                "invalid pass transition: {} -> {}",
                self.state.as_str(),
                next.as_str()
            )));
        }

        let prev_state = self.state.as_str().to_string();
        log::debug!("pass state: {} -> {}", prev_state, next.as_str());
        self.state = next.clone();
        self.history.push(next.clone());

        Ok(PassTransition {
            prev_state,
            new_state: next,
        })
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<PassTransition, AppError> {
        self.advance(PassState::Failed {
            reason: reason.into(),
        })
    }
}

impl Default for PassTracker {
    fn default() -> Self {
        Self::new()
    }
}
