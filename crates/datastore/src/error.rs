use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Duplicate match id {0} in the match collection")]
    DuplicateMatchId(u64),

    #[error("Delivery references match id {0}, which does not exist")]
    UnknownMatchId(u64),

    #[error(
        "Delivery in match {match_id} credits {batsman_runs} runs to the batter but only {total_runs} in total"
    )]
    RunsExceedTotal {
        match_id: u64,
        batsman_runs: u32,
        total_runs: u32,
    },
}
