use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The legacy name the source data uses for the batter column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatterColumn {
    /// The modern `batter` header.
    Batter,
    /// The legacy `batsman` header.
    Batsman,
}

impl BatterColumn {
    /// Returns the raw CSV header this variant corresponds to.
    pub fn header(&self) -> &'static str {
        match self {
            BatterColumn::Batter => "batter",
            BatterColumn::Batsman => "batsman",
        }
    }
}

/// The top-level analysis categories offered to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Batting,
    Bowling,
    TeamMatch,
    Player,
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "batting" | "Batting Analysis" => Ok(Category::Batting),
            "bowling" | "Bowling Analysis" => Ok(Category::Bowling),
            "team" | "Team & Match Analysis" => Ok(Category::TeamMatch),
            "player" | "Player Analysis" => Ok(Category::Player),
            other => Err(CoreError::InvalidInput(
                "category".to_string(),
                other.to_string(),
            )),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Batting => "Batting Analysis",
            Category::Bowling => "Bowling Analysis",
            Category::TeamMatch => "Team & Match Analysis",
            Category::Player => "Player Analysis",
        };
        write!(f, "{}", name)
    }
}

/// Every analysis the engine knows how to run.
///
/// The dispatcher matches on this exhaustively, so adding a variant without
/// handling it is a compile error rather than a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisKind {
    TopBatsmen,
    StrikeRateLeaders,
    BattingAverageLeaders,
    MostSixes,
    MostFours,
    OrangeCap,
    PlayerComparison,
    TopBowlers,
    PurpleCap,
    EconomyRate,
    BestBowlingFigures,
    TeamWinPct,
    ManOfTheMatchLeaders,
    HighestTeamScores,
    SuperOverMatches,
    TossImpact,
    VenueAnalysis,
    SeasonMatchCounts,
    CareerComparison,
    PlayerPerformance,
}

impl AnalysisKind {
    /// The category this analysis belongs to.
    pub fn category(&self) -> Category {
        use AnalysisKind::*;
        match self {
            TopBatsmen | StrikeRateLeaders | BattingAverageLeaders | MostSixes | MostFours
            | OrangeCap | PlayerComparison => Category::Batting,
            TopBowlers | PurpleCap | EconomyRate | BestBowlingFigures => Category::Bowling,
            TeamWinPct | ManOfTheMatchLeaders | HighestTeamScores | SuperOverMatches
            | TossImpact | VenueAnalysis | SeasonMatchCounts => Category::TeamMatch,
            CareerComparison | PlayerPerformance => Category::Player,
        }
    }

    /// The human-readable name shown by the presentation layer.
    pub fn display_name(&self) -> &'static str {
        use AnalysisKind::*;
        match self {
            TopBatsmen => "Top Batsmen",
            StrikeRateLeaders => "Strike Rate Leaders",
            BattingAverageLeaders => "Batting Average Leaders",
            MostSixes => "Most Sixes",
            MostFours => "Most Fours",
            OrangeCap => "Orange Cap",
            PlayerComparison => "Player Comparison",
            TopBowlers => "Top Bowlers",
            PurpleCap => "Purple Cap",
            EconomyRate => "Economy Rate",
            BestBowlingFigures => "Best Bowling Figures",
            TeamWinPct => "Team Win %",
            ManOfTheMatchLeaders => "Man of the Match Leaders",
            HighestTeamScores => "Highest Team Scores",
            SuperOverMatches => "Super Over Matches",
            TossImpact => "Toss Impact",
            VenueAnalysis => "Venue Analysis",
            SeasonMatchCounts => "Season Match Counts",
            CareerComparison => "Career Comparison",
            PlayerPerformance => "Player Performance",
        }
    }

    /// All analyses, in presentation order.
    pub fn all() -> &'static [AnalysisKind] {
        use AnalysisKind::*;
        &[
            TopBatsmen,
            StrikeRateLeaders,
            BattingAverageLeaders,
            MostSixes,
            MostFours,
            OrangeCap,
            PlayerComparison,
            TopBowlers,
            PurpleCap,
            EconomyRate,
            BestBowlingFigures,
            TeamWinPct,
            ManOfTheMatchLeaders,
            HighestTeamScores,
            SuperOverMatches,
            TossImpact,
            VenueAnalysis,
            SeasonMatchCounts,
            CareerComparison,
            PlayerPerformance,
        ]
    }
}

impl FromStr for AnalysisKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisKind::all()
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::InvalidInput("analysis".to_string(), s.to_string()))
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
