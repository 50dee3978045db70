//! Given steps for board drag BDD scenarios.

use super::world::{BoardWorld, parse_column, parse_tasks};
use eyre::WrapErr;
use kanboard::board::domain::Task;
use rstest_bdd_macros::given;

#[given(r#"a board with columns "{first}" and "{second}""#)]
fn board_with_columns(
    world: &mut BoardWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for column in [first, second] {
        let label = column.to_uppercase();
        world.board = world
            .board
            .with_column(parse_column(&column)?, label)
            .wrap_err("add column to scenario board")?;
    }
    Ok(())
}

#[given(r#"column "{column}" holds "{tasks}""#)]
fn column_holds(world: &mut BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let column_id = parse_column(&column)?;
    for task_id in parse_tasks(&tasks)? {
        let title = format!("Task {task_id}");
        world.board = world
            .board
            .with_task_added(Task::new(task_id, title), &column_id)
            .wrap_err("add task to scenario board")?;
    }
    Ok(())
}

#[given("the store rejects the next {count:u32} writes")]
fn store_rejects_writes(world: &mut BoardWorld, count: u32) -> Result<(), eyre::Report> {
    world
        .store
        .fail_next(count)
        .wrap_err("script store failures")?;
    Ok(())
}
