use rusqlite::Connection;

use std::error::Error;
use std::sync::{Arc, Mutex};

mod api_error;
mod auth;
mod boards;
mod checklist;
mod data;
mod notes;
mod store;
mod subtasks;
mod tasks;


#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

use data::{AppConfig, DBConnection};

pub fn build_rocket(connection: DBConnection, config: AppConfig) -> Rocket<Build> {
    rocket::build()
        .manage(connection)
        .manage(config)
        .mount(
            "/api",
            routes![
                auth::endpoints::register,
                auth::endpoints::login,
                auth::endpoints::logout,
                auth::endpoints::me,
                boards::endpoints::get_boards,
                boards::endpoints::add_board,
                boards::endpoints::update_board,
                boards::endpoints::delete_board,
                tasks::endpoints::get_tasks,
                tasks::endpoints::add_task,
                tasks::endpoints::update_task,
                tasks::endpoints::delete_task,
                subtasks::endpoints::get_subtasks,
                subtasks::endpoints::add_subtask,
                subtasks::endpoints::update_subtask,
                subtasks::endpoints::delete_subtask,
                notes::endpoints::get_notes,
                notes::endpoints::add_note,
                notes::endpoints::update_note,
                notes::endpoints::delete_note,
            ],
        )
        .register(
            "/api",
            catchers![
                api_error::bad_request,
                api_error::unauthorized,
                api_error::not_found,
                api_error::unprocessable_entity,
                api_error::internal_server_error,
            ],
        )
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config: AppConfig = rocket::Config::figment().extract()?;

    let connection = Connection::open(&config.database_path)?;
    data::create_tables(&connection)?;
    let connection = Arc::new(Mutex::new(connection));

    build_rocket(connection, config).launch().await?;

    Ok(())
}
