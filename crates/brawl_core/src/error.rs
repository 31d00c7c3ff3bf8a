use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// Orchestration itself never fails: missing collaborators, short prefab
/// pools and stray knockout notifications all degrade to no-ops. Only the
/// configuration loading surface reports errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no player prefabs configured")]
    NoPlayerPrefabs,

    #[error("no player spawn points configured")]
    NoPlayerSpawnPoints,

    #[error("no enemy spawn points configured")]
    NoEnemySpawnPoints,
}
