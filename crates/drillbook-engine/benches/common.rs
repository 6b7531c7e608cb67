// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_sql_content(tasks: usize) -> String {
    let mut content = String::from("USE espn;\n\n");
    for i in 1..=tasks {
        content.push_str(&format!(
            "-- {i}. Find the players of team {i}\n-- sorted by name\nSELECT name\nFROM players\nWHERE team_id = {i}\n\nORDER BY name;\n\n"
        ));
    }
    content
}

#[allow(dead_code)]
pub fn generate_notebook_content(tasks: usize) -> String {
    let mut cells = Vec::new();
    for i in 1..=tasks {
        cells.push(markdown_cell(&format!("## Task {i}.1: Aggregate season {i}")));
        cells.push(code_cell("# Place your code here"));
        cells.push(markdown_cell(
            "##### Hint\n<details>\n<summary>Hint</summary>\n\nUse `groupby`.\n</details>",
        ));
        cells.push(markdown_cell("##### Solution"));
        cells.push(code_cell(&format!(
            "games[games['season'] == {i}].groupby('team').size()"
        )));
    }
    format!("{{\"cells\": [{}], \"nbformat\": 4}}", cells.join(","))
}

fn markdown_cell(source: &str) -> String {
    format!("{{\"cell_type\": \"markdown\", \"source\": {source:?}}}")
}

fn code_cell(source: &str) -> String {
    format!("{{\"cell_type\": \"code\", \"outputs\": [], \"source\": {source:?}}}")
}
