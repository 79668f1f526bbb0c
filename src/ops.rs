//! The six HCPL actions.

/// One validated HCPL action, with its operands already extracted.
///
/// DO and LET take their value from the logical line following the action
/// line; DONT and LET carry an inline index. The index always refers to the
/// *current* position in the Databer, so removing index 0 twice removes the
/// first two original elements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// `PLEASE DO :1.` — append a new Dataling.
    Do { value: i64 },
    /// `PLEASE DONT :2. <index>` — remove the Dataling at `index`.
    Dont { index: usize },
    /// `PLEASE LET :3. <index>` — overwrite the Dataling at `index`.
    Let { index: usize, value: i64 },
    /// `PLEASE CALL :4.` — render the whole Databer as one output record.
    Call,
    /// `PLEASE BREACH :5.` — clear the Databer.
    Breach,
    /// `PLEASE EXIT :6.` — halt; every remaining line is ignored.
    Exit,
}
