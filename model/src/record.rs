/// The amount of sensor readings a record holds.
pub const NUM_FEATURES: usize = 10;

/// The column order every model artifact was trained on.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "u_q",
    "coolant",
    "stator_winding",
    "u_d",
    "stator_tooth",
    "motor_speed",
    "i_d",
    "i_q",
    "stator_yoke",
    "torque",
];

/// A single row of motor sensor readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRecord {
    pub u_q: f64,
    pub coolant: f64,
    pub stator_winding: f64,
    pub u_d: f64,
    pub stator_tooth: f64,
    pub motor_speed: f64,
    pub i_d: f64,
    pub i_q: f64,
    pub stator_yoke: f64,
    pub torque: f64,
}

impl InputRecord {
    /// Creates a new `InputRecord` from values laid out in `FEATURE_NAMES` order.
    ///
    /// # Arguments
    /// * `values` - The readings in canonical column order.
    ///
    /// # Returns
    /// A new `InputRecord` instance.
    pub fn from_values(values: [f64; NUM_FEATURES]) -> Self {
        let [
            u_q,
            coolant,
            stator_winding,
            u_d,
            stator_tooth,
            motor_speed,
            i_d,
            i_q,
            stator_yoke,
            torque,
        ] = values;

        Self {
            u_q,
            coolant,
            stator_winding,
            u_d,
            stator_tooth,
            motor_speed,
            i_d,
            i_q,
            stator_yoke,
            torque,
        }
    }

    /// Returns the readings as a plain ordered sequence, in `FEATURE_NAMES` order.
    pub fn values(&self) -> [f64; NUM_FEATURES] {
        [
            self.u_q,
            self.coolant,
            self.stator_winding,
            self.u_d,
            self.stator_tooth,
            self.motor_speed,
            self.i_d,
            self.i_q,
            self.stator_yoke,
            self.torque,
        ]
    }

    /// Looks up a reading by its column name.
    pub fn get(&self, name: &str) -> Option<f64> {
        column_index(name).map(|i| self.values()[i])
    }

    /// Iterates over `(column name, value)` pairs in canonical order.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.values())
    }
}

/// Returns the canonical position of a column, if it exists.
pub fn column_index(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|&feature| feature == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InputRecord {
        InputRecord::from_values([1., 2., 3., 4., 5., 6., 7., 8., 9., 10.])
    }

    #[test]
    fn values_follow_feature_order() {
        let record = record();
        assert_eq!(record.u_q, 1.);
        assert_eq!(record.motor_speed, 6.);
        assert_eq!(record.torque, 10.);
        assert_eq!(record.values(), [1., 2., 3., 4., 5., 6., 7., 8., 9., 10.]);
    }

    #[test]
    fn get_by_name() {
        let record = record();
        assert_eq!(record.get("i_q"), Some(8.));
        assert_eq!(record.get("stator_yoke"), Some(9.));
        assert_eq!(record.get("rotor"), None);
    }

    #[test]
    fn columns_pair_names_with_values() {
        let columns: Vec<_> = record().columns().collect();
        assert_eq!(columns.len(), NUM_FEATURES);
        assert_eq!(columns[0], ("u_q", 1.));
        assert_eq!(columns[9], ("torque", 10.));
    }
}
