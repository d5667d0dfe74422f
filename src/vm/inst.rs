/// One instruction of the linear program a determinized automaton lowers
/// to. Every `Jump*` consumes the current byte when it fires; addresses are
/// absolute program offsets, resolved from state labels at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inst {
    Failure,
    FailLength,
    Success,
    Jump(usize),
    JumpByte(u8, usize),
    JumpMask(u8, usize),
    JumpRange(u8, u8, usize),
}
