//! Calculator selection logic.

use std::sync::Arc;

use factcalc_core::calculator::{Calculator, FactError};
use factcalc_core::registry::CalculatorFactory;

/// Get calculators to run based on algorithm selection.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FactError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factcalc_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::default();
        let calcs = get_calculators_to_run("all", &factory).unwrap();
        let names: Vec<&str> = calcs.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Serial", "Parallel"]);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::default();
        let calcs = get_calculators_to_run("serial", &factory).unwrap();
        assert_eq!(calcs.len(), 1);
        assert_eq!(calcs[0].name(), "Serial");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::default();
        assert!(get_calculators_to_run("unknown", &factory).is_err());
    }
}
