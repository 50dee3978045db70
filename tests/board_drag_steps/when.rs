//! When steps for board drag BDD scenarios.

use super::world::{BoardWorld, dragged_at, parse_column, parse_task, run_async};
use eyre::WrapErr;
use kanboard::board::domain::Point;
use rstest_bdd_macros::when;

fn drop_at(world: &mut BoardWorld, task: &str, pointer: Point) -> Result<(), eyre::Report> {
    let controller = world.controller()?;
    controller.pick(parse_task(task)?).wrap_err("pick card")?;
    controller
        .pointer_moved(pointer, dragged_at(pointer))
        .wrap_err("hover card")?;
    controller
        .release(pointer, dragged_at(pointer))
        .wrap_err("release card")?;
    Ok(())
}

#[when(r#"card "{task}" is dragged onto column "{column}""#)]
fn drag_onto_column(world: &mut BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    let pointer = world.column_pointer(&parse_column(&column)?)?;
    drop_at(world, &task, pointer)
}

#[when(r#"card "{task}" is dropped on card slot {index:usize} of column "{column}""#)]
fn drop_on_slot(
    world: &mut BoardWorld,
    task: String,
    index: usize,
    column: String,
) -> Result<(), eyre::Report> {
    let pointer = world.slot_pointer(&parse_column(&column)?, index)?;
    drop_at(world, &task, pointer)
}

#[when(r#"card "{task}" is picked up"#)]
fn pick_card(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = parse_task(&task)?;
    world.controller()?.pick(task_id).wrap_err("pick card")?;
    Ok(())
}

#[when(r#"the pointer hovers over column "{column}""#)]
fn hover_over_column(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let pointer = world.column_pointer(&parse_column(&column)?)?;
    world
        .controller()?
        .pointer_moved(pointer, dragged_at(pointer))
        .wrap_err("hover card")?;
    Ok(())
}

#[when("the drag is cancelled")]
fn cancel_drag(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.controller()?.cancel().wrap_err("cancel drag")?;
    Ok(())
}

#[when("the card is released outside the board")]
fn release_outside(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let pointer = Point::new(-500, -500);
    world
        .controller()?
        .release(pointer, dragged_at(pointer))
        .wrap_err("release card")?;
    Ok(())
}

#[when("pending moves are settled")]
fn settle_moves(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let result = run_async(world.controller()?.settle());
    world.settle_result = Some(result);
    Ok(())
}
