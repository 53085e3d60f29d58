//! Builds a small schema tree in a temporary directory and merges it.
//!
//! Run with: `cargo run -p sdl-merge-demos --example merge_tree`

use std::fs;

use sdl_merge_discovery::{MergeConfig, merge_schemas_with_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempfile::tempdir()?;
    fs::create_dir_all(root.path().join("accounts"))?;
    fs::write(
        root.path().join("accounts/user.graphql"),
        "type User {\n  id: ID!\n  name: String\n}\n",
    )?;
    fs::write(
        root.path().join("query.graphql"),
        "type Query {\n  user(id: ID!): User\n}\n",
    )?;

    let output = root.path().join("merged.graphql");
    let config = MergeConfig {
        sort_paths: true,
        ..MergeConfig::default()
    };
    let outcome = merge_schemas_with_config(root.path(), ".graphql", &output, &config)?;

    println!("merged schema:\n{}", outcome.merged);
    println!("report:\n{}", outcome.report.to_json()?);

    let reparsed = sdl_merge_core::SchemaDocument::parse(&outcome.merged)?;
    println!("merged output reparses to {} definitions", reparsed.definition_count());
    Ok(())
}
