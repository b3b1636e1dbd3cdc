use crate::error::Error;
use arch::Machine;

/// Machine description from a YAML file, or the default machine.
///
/// ```yaml
/// size: 200
/// ```
pub fn load_machine(path: Option<&str>) -> Result<Machine, Error> {
    match path {
        Some(fname) => {
            let yaml = std::fs::read_to_string(fname)
                .map_err(|e| Error::FileOpen(fname.to_string(), e))?;
            let machine = parse_machine(fname, &yaml)?;
            log::debug!("machine description {}: {:?}", fname, machine);
            Ok(machine)
        }
        None => Ok(Machine::default()),
    }
}

pub fn parse_machine(name: &str, yaml: &str) -> Result<Machine, Error> {
    serde_yaml::from_str(yaml).map_err(|e| Error::Machine(name.to_string(), e))
}

#[test]
fn test() {
    assert_eq!(parse_machine("m", "size: 300").unwrap(), Machine::new(300));
    assert_eq!(parse_machine("m", "{}").unwrap(), Machine::default());
    assert!(parse_machine("m", "size: -1").is_err());
    assert_eq!(load_machine(None).unwrap(), Machine::default());
    assert!(matches!(
        load_machine(Some("/nonexistent/machine.yaml")),
        Err(Error::FileOpen(..))
    ));
}
