//! Then steps for board drag BDD scenarios.

use super::world::{BoardWorld, parse_column, parse_tasks};
use kanboard::board::{domain::BoardChange, services::BoardControllerError};
use rstest_bdd_macros::then;

fn column_order(world: &BoardWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let column_id = parse_column(column)?;
    let listed = world
        .visible_board()
        .column(&column_id)
        .ok_or_else(|| eyre::eyre!("unknown column {column}"))?;
    Ok(listed.task_ids().iter().map(ToString::to_string).collect())
}

#[then(r#"column "{column}" lists "{tasks}""#)]
fn column_lists(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = parse_tasks(&tasks)?
        .iter()
        .map(ToString::to_string)
        .collect();
    let actual = column_order(world, &column)?;
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column {column} to list {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let actual = column_order(world, &column)?;
    if !actual.is_empty() {
        return Err(eyre::eyre!("expected column {column} to be empty, found {actual:?}"));
    }
    Ok(())
}

#[then("{count:usize} moves were persisted")]
fn moves_persisted(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let persisted = world.store.persisted()?;
    if persisted.len() != count {
        return Err(eyre::eyre!(
            "expected {count} persisted moves, found {}",
            persisted.len()
        ));
    }
    Ok(())
}

#[then("the last notification reports an unchanged board")]
fn last_notification_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let changes = world.sink.changes();
    let last = changes
        .last()
        .ok_or_else(|| eyre::eyre!("no notifications recorded"))?;
    if !matches!(last, BoardChange::Unchanged { .. }) {
        return Err(eyre::eyre!("expected an unchanged notification, got {last:?}"));
    }
    Ok(())
}

#[then("settling fails")]
fn settling_fails(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .settle_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("pending moves were never settled"))?;
    if !matches!(result, Err(BoardControllerError::Commit(_))) {
        return Err(eyre::eyre!("expected a commit failure, got {result:?}"));
    }
    Ok(())
}

#[then("exactly {count:usize} persistence failure was reported")]
fn persistence_failures_reported(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let failures = world
        .sink
        .changes()
        .iter()
        .filter(|change| matches!(change, BoardChange::PersistFailed { .. }))
        .count();
    if failures != count {
        return Err(eyre::eyre!(
            "expected {count} persistence failures, found {failures}"
        ));
    }
    Ok(())
}
