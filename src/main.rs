use crate::db::connection::{init_db, Store};
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod db;
mod directory;
mod domain;
mod errors;
mod ingest;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let store = Store::new("directory.sqlite3");

    if let Err(e) = init_db(&store, "sql/schema.sql") {
        eprintln!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    // `import <snapshot.json>` loads a listing snapshot and exits; with no
    // arguments we serve.
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {}
        [cmd, path] if cmd.as_str() == "import" => {
            match ingest::import_file(&store, path) {
                Ok(stats) => {
                    println!(
                        "Imported {} listings ({} skipped, {} slug collisions)",
                        stats.saved, stats.skipped, stats.slug_collisions
                    );
                    return;
                }
                Err(e) => {
                    eprintln!("Import failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("usage: dental_directory [import <snapshot.json>]");
            std::process::exit(2);
        }
    }

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }
}
