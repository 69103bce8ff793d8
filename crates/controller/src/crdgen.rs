//! Prints the Group CRD manifest as YAML.

use anyhow::Result;
use kube::CustomResourceExt;

use ran_lcm_api::Group;

fn main() -> Result<()> {
    print!("{}", serde_yaml::to_string(&Group::crd())?);
    Ok(())
}
