//! Circuit and broadcaster registry
//!
//! Holds the reference data an event points at and resolves those pointers.
//! Circuits are found by `id`. Broadcasters are found by position: code
//! `BR<n>` means the n-th broadcaster in file order, whatever its `id` field
//! says. Reordering the broadcasters file changes which names an event gets.

use crate::types::{Broadcaster, CalError, Circuit, Event, Result};

/// Prefix carried by every broadcaster code
pub const BROADCASTER_CODE_PREFIX: &str = "BR";

/// Circuits and broadcasters, in parse order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    circuits: Vec<Circuit>,
    broadcasters: Vec<Broadcaster>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a circuit; earlier circuits win on duplicate ids
    pub fn add_circuit(&mut self, circuit: Circuit) {
        self.circuits.push(circuit);
    }

    /// Append a broadcaster; its position defines its code
    pub fn add_broadcaster(&mut self, broadcaster: Broadcaster) {
        self.broadcasters.push(broadcaster);
    }

    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    pub fn broadcasters(&self) -> &[Broadcaster] {
        &self.broadcasters
    }

    /// Get the first circuit with the given id
    pub fn get_circuit(&self, id: &str) -> Option<&Circuit> {
        self.circuits.iter().find(|circuit| circuit.id == id)
    }

    /// Resolve the circuit hosting an event
    pub fn circuit_for(&self, event: &Event) -> Result<&Circuit> {
        self.get_circuit(&event.location).ok_or_else(|| {
            CalError::ReferenceNotFound(format!(
                "event {} refers to unknown circuit {:?}",
                event.id, event.location
            ))
        })
    }

    /// Resolve one positional broadcaster code such as `BR2`
    pub fn get_broadcaster(&self, code: &str) -> Result<&Broadcaster> {
        let index = broadcaster_index(code)?;
        self.broadcasters.get(index).ok_or_else(|| {
            CalError::ReferenceNotFound(format!(
                "broadcaster code {:?} points past the {} known broadcasters",
                code,
                self.broadcasters.len()
            ))
        })
    }

    /// Resolve all broadcasters listed by an event, in listed order
    pub fn broadcasters_for(&self, event: &Event) -> Result<Vec<&Broadcaster>> {
        event
            .broadcaster_codes()
            .map(|code| self.get_broadcaster(code))
            .collect()
    }

    /// Get registry statistics
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            num_circuits: self.circuits.len(),
            num_broadcasters: self.broadcasters.len(),
        }
    }
}

/// Zero-based broadcaster index for a `BR<n>` code
fn broadcaster_index(code: &str) -> Result<usize> {
    let invalid = |why: &str| {
        CalError::ReferenceNotFound(format!("broadcaster code {:?} {}", code, why))
    };

    let number = code
        .strip_prefix(BROADCASTER_CODE_PREFIX)
        .ok_or_else(|| invalid("lacks the BR prefix"))?;
    let number: usize = number
        .trim()
        .parse()
        .map_err(|_| invalid("has a non-numeric suffix"))?;

    number.checked_sub(1).ok_or_else(|| invalid("is not 1-based"))
}

/// Registry statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    pub num_circuits: usize,
    pub num_broadcasters: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use chrono::{NaiveDate, NaiveTime};

    fn circuit(id: &str, name: &str) -> Circuit {
        Circuit {
            id: id.to_string(),
            name: name.to_string(),
            location: "City".to_string(),
            timezone: "EST".to_string(),
            direction: "CW".to_string(),
        }
    }

    fn broadcaster(id: &str, name: &str) -> Broadcaster {
        let mut extra = Record::new();
        extra.insert("id", id);
        Broadcaster {
            name: name.to_string(),
            extra,
        }
    }

    fn event(location: &str, broadcaster: &str) -> Event {
        Event {
            id: "E1".to_string(),
            description: "Race".to_string(),
            location: location.to_string(),
            broadcaster: broadcaster.to_string(),
            date: NaiveDate::from_ymd_opt(2022, 5, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
            end: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            extra: Record::new(),
        }
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_circuit(circuit("C1", "Speedway"));
        registry.add_circuit(circuit("C2", "Ring"));
        registry.add_circuit(circuit("C1", "Duplicate"));
        // Ids deliberately disagree with file position
        registry.add_broadcaster(broadcaster("BR2", "ChannelA"));
        registry.add_broadcaster(broadcaster("BR1", "ChannelB"));
        registry
    }

    #[test]
    fn test_circuit_lookup_first_match() {
        let registry = registry();
        assert_eq!(registry.circuit_for(&event("C1", "BR1")).unwrap().name, "Speedway");
        assert_eq!(registry.circuit_for(&event("C2", "BR1")).unwrap().name, "Ring");
    }

    #[test]
    fn test_unknown_circuit() {
        let err = registry().circuit_for(&event("C9", "BR1")).unwrap_err();
        assert!(matches!(err, CalError::ReferenceNotFound(_)));
    }

    #[test]
    fn test_broadcasters_are_positional() {
        let registry = registry();
        let names: Vec<&str> = registry
            .broadcasters_for(&event("C1", "BR1,BR2"))
            .unwrap()
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        // BR1 is the first record in the file even though its id says BR2
        assert_eq!(names, vec!["ChannelA", "ChannelB"]);

        let names: Vec<&str> = registry
            .broadcasters_for(&event("C1", "BR2,BR1"))
            .unwrap()
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["ChannelB", "ChannelA"]);
    }

    #[test]
    fn test_bad_broadcaster_codes() {
        let registry = registry();
        for code in ["BR3", "BR0", "BRx", "CH1", "", "BR1,"] {
            let result = registry.broadcasters_for(&event("C1", code));
            assert!(
                matches!(result, Err(CalError::ReferenceNotFound(_))),
                "resolved {:?}",
                code
            );
        }
    }

    #[test]
    fn test_stats() {
        let stats = registry().stats();
        assert_eq!(stats.num_circuits, 3);
        assert_eq!(stats.num_broadcasters, 2);
    }
}
