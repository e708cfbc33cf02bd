//! Python bindings. Seasons and configs cross the boundary as JSON strings
//! and every result comes back as JSON.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::constants::{HOME_FIELD_ADVANTAGE, PLAYOFF_SEEDS, SCORING_STDDEV};
use crate::season::Season;
use crate::team::Conference;

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn load_season(season_json: &str) -> PyResult<Season> {
    Season::from_json_str(season_json).map_err(value_error)
}

fn load_config(config_json: Option<&str>) -> PyResult<EngineConfig> {
    match config_json {
        Some(text) => serde_json::from_str(text).map_err(value_error),
        None => Ok(EngineConfig::default()),
    }
}

fn to_json<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(value_error)
}

/// Standings of one conference with playoff magic numbers.
#[pyfunction]
#[pyo3(signature = (season_json, conference, config_json = None))]
fn standings(season_json: &str, conference: &str, config_json: Option<&str>) -> PyResult<String> {
    let season = load_season(season_json)?;
    let config = load_config(config_json)?;
    let conference: Conference = conference
        .parse()
        .map_err(|other| value_error(format!("unknown conference {other:?}")))?;
    to_json(&season.standings(conference, &config.search))
}

/// Both conference brackets and the Super Bowl.
#[pyfunction]
fn bracket(season_json: &str) -> PyResult<String> {
    to_json(&load_season(season_json)?.bracket())
}

#[pyfunction]
fn draft_order(season_json: &str) -> PyResult<String> {
    to_json(&load_season(season_json)?.draft_order())
}

/// Clinch, elimination, magic numbers and paths for every goal of one team.
#[pyfunction]
#[pyo3(signature = (season_json, team_id, config_json = None))]
fn team_outlook(season_json: &str, team_id: &str, config_json: Option<&str>) -> PyResult<String> {
    let season = load_season(season_json)?;
    let config = load_config(config_json)?;
    to_json(&season.outlook(team_id, &config.search))
}

/// Monte Carlo playoff odds. Releases the GIL while simulating.
#[pyfunction]
#[pyo3(signature = (season_json, config_json = None))]
fn playoff_odds(py: Python<'_>, season_json: &str, config_json: Option<&str>) -> PyResult<String> {
    let season = load_season(season_json)?;
    let config = load_config(config_json)?;
    let odds = py.allow_threads(|| season.playoff_odds(&config.simulation));
    to_json(&odds)
}

/// Python module definition
#[pymodule]
fn standings_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(standings, m)?)?;
    m.add_function(wrap_pyfunction!(bracket, m)?)?;
    m.add_function(wrap_pyfunction!(draft_order, m)?)?;
    m.add_function(wrap_pyfunction!(team_outlook, m)?)?;
    m.add_function(wrap_pyfunction!(playoff_odds, m)?)?;

    // Constants
    m.add("PLAYOFF_SEEDS", PLAYOFF_SEEDS)?;
    m.add("SCORING_STDDEV", SCORING_STDDEV)?;
    m.add("HOME_FIELD_ADVANTAGE", HOME_FIELD_ADVANTAGE)?;

    Ok(())
}
