use crate::{challenge::ChallengeKind, tip::TipCategory};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    CompleteAction(String),
    UpdateChallengeProgress(String, u32),
    MakeDecision(usize),
    ToggleFavoriteTip(String),
    BrowseTips(Option<TipCategory>),
    ResetDailyActions,
    Show(View),
    SimulateChallengeProgress,
    AccrueBudget,
    CheckDailyReset,
    RotateTip,
    SendHelp,
    ErrorMessage(String),
    Nothing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum View {
    Status,
    Actions,
    Challenges(Option<ChallengeKind>),
    City,
    Badges,
    Tips,
    FeaturedTip,
}
