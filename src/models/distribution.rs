use serde::{Deserialize, Serialize};

/// One input line: `<arrival_time>,<interarrival_time>`, no header.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ArrivalRecord {
    pub arrival: f64,
    pub interarrival: f64,
}

/// Arrival and interarrival times as two index-aligned sequences, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    pub arrival: Vec<f64>,
    pub interarrival: Vec<f64>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arrival: Vec::with_capacity(capacity),
            interarrival: Vec::with_capacity(capacity),
        }
    }

    /// Appends one record to both sequences, keeping them aligned.
    pub fn push(&mut self, record: ArrivalRecord) {
        self.arrival.push(record.arrival);
        self.interarrival.push(record.interarrival);
    }

    pub fn len(&self) -> usize {
        self.arrival.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty()
    }

    /// Iterates the sequences back as records.
    pub fn records(&self) -> impl Iterator<Item = ArrivalRecord> + '_ {
        self.arrival
            .iter()
            .zip(&self.interarrival)
            .map(|(&arrival, &interarrival)| ArrivalRecord {
                arrival,
                interarrival,
            })
    }
}

impl FromIterator<ArrivalRecord> for Distribution {
    fn from_iter<I: IntoIterator<Item = ArrivalRecord>>(iter: I) -> Self {
        let mut distribution = Distribution::new();
        for record in iter {
            distribution.push(record);
        }
        distribution
    }
}
