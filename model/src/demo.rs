use crate::InputRecord;

/// Closed-form rotor temperature estimate used when no model artifact is available.
pub fn demo_prediction(record: &InputRecord) -> f64 {
    record.u_q + record.motor_speed / 100. + record.i_q.abs() * 0.5
}
