//! Config command: print the effective configuration

use anyhow::Result;

use crate::ConfigArgs;

pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = super::build_config(args)?;
    println!("{}", config.to_json_string()?);
    Ok(())
}
