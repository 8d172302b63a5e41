//! The `healthbasics routes` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use healthbasics_core::route::Route;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Path", "Page", "File", "Header", "Footer"]);

    let mark = |b: bool| if b { "yes" } else { "-" };
    for route in Route::ALL {
        table.add_row(vec![
            Cell::new(route.path()),
            Cell::new(route.label()),
            Cell::new(route.output_file()),
            Cell::new(mark(route.in_header_nav())),
            Cell::new(mark(route.in_footer_links())),
        ]);
    }

    println!("{table}");
    Ok(())
}
