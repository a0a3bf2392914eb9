use super::print::{print_car_detail, print_cars, print_json, print_messages};
use super::setup::CarArgs;
use super::AppContext;
use carlot::api::ConfigAction;
use carlot::commands;
use carlot::config::DATA_FILE_KEY;
use carlot::error::{InventoryError, Result};
use carlot::model::Car;
use std::path::Path;

pub(super) fn handle_list(
    ctx: &mut AppContext,
    sort: Option<String>,
    desc: bool,
    json: bool,
) -> Result<()> {
    let result = match &sort {
        Some(column) => ctx.api.sort_by(column, desc),
        None => ctx.api.list(),
    };

    if json {
        return print_json(&result.listed_cars);
    }

    let column = sort.as_deref().map(|c| c.trim().to_lowercase());
    print_cars(
        &result.listed_cars,
        ctx.api.fields(),
        column.as_deref().map(|c| (c, desc)),
    );
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_view(ctx: &AppContext, id: String) -> Result<()> {
    let result = ctx.api.view(&id)?;
    for car in &result.listed_cars {
        print_car_detail(car, ctx.api.fields());
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_add(ctx: &mut AppContext, args: CarArgs) -> Result<()> {
    let mut car = Car::default();
    for (field, value) in args.provided() {
        car.set(field, value);
    }

    let result = ctx.api.add(&car)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_edit(ctx: &mut AppContext, original_id: String, args: CarArgs) -> Result<()> {
    let changes = args.provided();
    if changes.is_empty() {
        return Err(InventoryError::Api(
            "Nothing to change: pass at least one field flag".into(),
        ));
    }

    // Stored ids are trimmed on add, so the lookup must be too.
    let mut session = ctx.api.begin_edit(original_id.trim())?;
    for (field, value) in changes {
        session.form_mut().set(field, value);
    }

    let result = ctx.api.commit_edit(session)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_delete(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.delete(&id)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_path();
    if let Some(path) = &result.data_path {
        println!("{}", path.display());
    }
    Ok(())
}

pub(super) fn handle_config(
    data_dir: &Path,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(data_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("{} = {}", DATA_FILE_KEY, config.data_file);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
