//! Type 2 charstring interpreter.
//!
//! Executes a glyph's charstring, including any global and local subroutines it calls, and
//! folds every line and curve segment into a bounding box. Hints only matter for the number
//! of mask bytes they imply; their values are discarded.

use std::convert::TryFrom;
use std::fmt;

use log::trace;
use num_traits::ToPrimitive;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use crate::binary::read::{ReadCtxt, ReadScope};
use crate::binary::{I16Be, U8};
use crate::cff::outline::charstring::CharStringParser;
use crate::cff::outline::{BBox, Builder};
use crate::cff::{calc_subroutine_bias, CFFError};
use crate::error::ParseError;
use crate::tables::Fixed;

mod argstack;

pub use argstack::ArgumentsStack;

// Limits according to the Adobe Technical Note #5177 Appendix B.
pub(crate) const STACK_LIMIT: u8 = 10;
pub(crate) const MAX_ARGUMENTS_STACK_LEN: usize = 48;

/// Instructions executed per glyph, subroutines included.
pub(crate) const MAX_OPS: u32 = 0x10_0000;

pub(crate) const TWO_BYTE_OPERATOR_MARK: u8 = 12;

/// Seed for the `random` operator, so that executing a charstring is repeatable.
const RANDOM_SEED: u64 = 0x5EED_C0DE;

pub(crate) trait IsEven {
    fn is_even(&self) -> bool;
    fn is_odd(&self) -> bool;
}

/// The local subroutines available to a charstring.
#[derive(Debug, Copy, Clone)]
pub enum LocalSubrs<'a> {
    Subrs(&'a [Vec<u8>]),
    /// The font has no local subroutines.
    Missing,
    /// Local subroutines are selected per glyph through `FDSelect`.
    CidKeyed,
}

/// Compute the bounding box of the outline described by `char_string`.
///
/// Returns `Ok(None)` when the charstring draws no line or curve, such as a glyph made only
/// of moves.
pub fn glyph_bounds(
    char_string: &[u8],
    global_subrs: &[Vec<u8>],
    local_subrs: Option<&[Vec<u8>]>,
) -> Result<Option<BBox>, CFFError> {
    let local_subrs = local_subrs.map_or(LocalSubrs::Missing, LocalSubrs::Subrs);
    execute(char_string, global_subrs, local_subrs)
}

pub(crate) fn execute(
    char_string: &[u8],
    global_subrs: &[Vec<u8>],
    local_subrs: LocalSubrs<'_>,
) -> Result<Option<BBox>, CFFError> {
    let mut ctx = CharStringVisitorContext::new(global_subrs, local_subrs);
    let mut data = [0.0; MAX_ARGUMENTS_STACK_LEN];
    let mut stack = ArgumentsStack::new(&mut data);
    ctx.visit(char_string, 0, &mut stack)?;

    if ctx.builder.overflowed() {
        return Err(CFFError::BboxOverflow);
    }
    Ok(ctx.builder.bbox())
}

/// Execution state of one glyph, shared by all the subroutines it calls.
struct CharStringVisitorContext<'a> {
    global_subrs: &'a [Vec<u8>],
    local_subrs: LocalSubrs<'a>,
    stems_len: u32,
    ops_remaining: u32,
    has_endchar: bool,
    transient: FxHashMap<i32, f64>,
    rng: SmallRng,
    builder: Builder,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Operator {
    HorizontalStem,
    VerticalStem,
    VerticalMoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    CallLocalSubroutine,
    Return,
    Endchar,
    HorizontalStemHintMask,
    HintMask,
    CounterMask,
    MoveTo,
    HorizontalMoveTo,
    VerticalStemHintMask,
    CurveLine,
    LineCurve,
    VvCurveTo,
    HhCurveTo,
    CallGlobalSubroutine,
    VhCurveTo,
    HvCurveTo,
    // Two-byte operators
    DotSection,
    And,
    Or,
    Not,
    Abs,
    Add,
    Sub,
    Div,
    Neg,
    Eq,
    Drop,
    Put,
    Get,
    IfElse,
    Random,
    Mul,
    Sqrt,
    Dup,
    Exch,
    Index,
    Roll,
    Hflex,
    Flex,
    Hflex1,
    Flex1,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Instruction {
    Operand(f64),
    Operator(Operator),
}

impl<'a> CharStringVisitorContext<'a> {
    fn new(global_subrs: &'a [Vec<u8>], local_subrs: LocalSubrs<'a>) -> Self {
        CharStringVisitorContext {
            global_subrs,
            local_subrs,
            stems_len: 0,
            ops_remaining: MAX_OPS,
            has_endchar: false,
            transient: FxHashMap::default(),
            rng: SmallRng::seed_from_u64(RANDOM_SEED),
            builder: Builder::new(),
        }
    }

    fn visit(
        &mut self,
        char_string: &[u8],
        depth: u8,
        stack: &mut ArgumentsStack<'_, f64>,
    ) -> Result<(), CFFError> {
        let mut s = ReadScope::new(char_string).ctxt();
        while s.bytes_available() {
            self.ops_remaining = self
                .ops_remaining
                .checked_sub(1)
                .ok_or(CFFError::OperationLimitReached)?;
            let op = match read_instruction(&mut s)? {
                Instruction::Operand(value) => {
                    stack.push(value)?;
                    continue;
                }
                Instruction::Operator(op) => op,
            };

            match op {
                Operator::HorizontalStem
                | Operator::VerticalStem
                | Operator::HorizontalStemHintMask
                | Operator::VerticalStemHintMask => {
                    // An odd operand left over is the width.
                    self.stems_len += stack.len() as u32 >> 1;
                    stack.clear();
                }
                Operator::HintMask | Operator::CounterMask => {
                    // Operands before a mask are implicit vstem hints.
                    self.stems_len += stack.len() as u32 >> 1;
                    stack.clear();

                    let mask_len = (self.stems_len as usize + 7) >> 3;
                    s.read_slice(mask_len).map_err(ParseError::from)?;
                }
                Operator::MoveTo => self.parse_path(stack, |p| p.parse_move_to())?,
                Operator::HorizontalMoveTo => {
                    self.parse_path(stack, |p| p.parse_horizontal_move_to())?
                }
                Operator::VerticalMoveTo => {
                    self.parse_path(stack, |p| p.parse_vertical_move_to())?
                }
                Operator::LineTo => self.parse_path(stack, |p| p.parse_line_to())?,
                Operator::HorizontalLineTo => {
                    self.parse_path(stack, |p| p.parse_horizontal_line_to())?
                }
                Operator::VerticalLineTo => {
                    self.parse_path(stack, |p| p.parse_vertical_line_to())?
                }
                Operator::CurveTo => self.parse_path(stack, |p| p.parse_curve_to())?,
                Operator::CurveLine => self.parse_path(stack, |p| p.parse_curve_line())?,
                Operator::LineCurve => self.parse_path(stack, |p| p.parse_line_curve())?,
                Operator::HhCurveTo => self.parse_path(stack, |p| p.parse_hh_curve_to())?,
                Operator::VvCurveTo => self.parse_path(stack, |p| p.parse_vv_curve_to())?,
                Operator::HvCurveTo => self.parse_path(stack, |p| p.parse_hv_curve_to())?,
                Operator::VhCurveTo => self.parse_path(stack, |p| p.parse_vh_curve_to())?,
                Operator::Flex => self.parse_path(stack, |p| p.parse_flex())?,
                Operator::Hflex => self.parse_path(stack, |p| p.parse_hflex())?,
                Operator::Hflex1 => self.parse_path(stack, |p| p.parse_hflex1())?,
                Operator::Flex1 => self.parse_path(stack, |p| p.parse_flex1())?,
                Operator::CallLocalSubroutine => {
                    let local_subrs = match self.local_subrs {
                        LocalSubrs::Subrs(subrs) => subrs,
                        LocalSubrs::Missing => return Err(CFFError::NoLocalSubroutines),
                        LocalSubrs::CidKeyed => return Err(CFFError::UnsupportedCidFont),
                    };
                    self.call_subroutine(op, local_subrs, depth, stack)?;
                    if self.has_endchar {
                        break;
                    }
                }
                Operator::CallGlobalSubroutine => {
                    self.call_subroutine(op, self.global_subrs, depth, stack)?;
                    if self.has_endchar {
                        break;
                    }
                }
                Operator::Return => break,
                Operator::Endchar => {
                    stack.clear();
                    self.has_endchar = true;
                    break;
                }
                Operator::DotSection => {}
                Operator::Abs => {
                    let a = stack.pop()?;
                    stack.push(a.abs())?;
                }
                Operator::Add => {
                    let b = stack.pop()?;
                    let a = stack.pop()?;
                    stack.push(a + b)?;
                }
                Operator::Sub => {
                    let b = stack.pop()?;
                    let a = stack.pop()?;
                    stack.push(a - b)?;
                }
                Operator::Mul => {
                    let b = stack.pop()?;
                    let a = stack.pop()?;
                    stack.push(a * b)?;
                }
                Operator::Div => {
                    let b = stack.pop()?;
                    let a = stack.pop()?;
                    stack.push(a / b)?;
                }
                Operator::Neg => {
                    let a = stack.pop()?;
                    stack.push(-a)?;
                }
                Operator::Sqrt => {
                    let a = stack.pop()?;
                    stack.push(a.sqrt())?;
                }
                Operator::And => {
                    let b = stack.pop()?;
                    let a = stack.pop()?;
                    stack.push(bool_operand(a != 0.0 && b != 0.0))?;
                }
                Operator::Or => {
                    let b = stack.pop()?;
                    let a = stack.pop()?;
                    stack.push(bool_operand(a != 0.0 || b != 0.0))?;
                }
                Operator::Not => {
                    let a = stack.pop()?;
                    stack.push(bool_operand(a == 0.0))?;
                }
                Operator::Eq => {
                    let b = stack.pop()?;
                    let a = stack.pop()?;
                    stack.push(bool_operand(a == b))?;
                }
                Operator::IfElse => {
                    let v2 = stack.pop()?;
                    let v1 = stack.pop()?;
                    let s2 = stack.pop()?;
                    let s1 = stack.pop()?;
                    stack.push(if v1 <= v2 { s1 } else { s2 })?;
                }
                Operator::Drop => {
                    stack.pop()?;
                }
                Operator::Dup => {
                    let a = stack.peek(0)?;
                    stack.push(a)?;
                }
                Operator::Exch => {
                    let b = stack.pop()?;
                    let a = stack.pop()?;
                    stack.push(b)?;
                    stack.push(a)?;
                }
                Operator::Index => {
                    let i = stack.pop()?;
                    // A negative index copies the top element.
                    let index = if i < 0.0 {
                        0
                    } else {
                        i.to_usize().ok_or(CFFError::StackUnderflow)?
                    };
                    let value = stack.peek(index)?;
                    stack.push(value)?;
                }
                Operator::Roll => {
                    let j = stack.pop()?;
                    let n = stack.pop()?;
                    let n = n
                        .to_i32()
                        .and_then(|n| usize::try_from(n).ok())
                        .ok_or(CFFError::InvalidArgumentsStackLength)?;
                    let j = j.to_i64().ok_or(CFFError::InvalidArgumentsStackLength)?;
                    let shift = if n == 0 {
                        0
                    } else {
                        // n is at most the stack limit
                        j.rem_euclid(n as i64) as usize
                    };
                    stack.roll(n, shift)?;
                }
                Operator::Put => {
                    let i = stack.pop()?;
                    let value = stack.pop()?;
                    self.transient.insert(transient_index(i)?, value);
                }
                Operator::Get => {
                    let i = stack.pop()?;
                    let value = self
                        .transient
                        .get(&transient_index(i)?)
                        .copied()
                        .ok_or(CFFError::InvalidTransientIndex)?;
                    stack.push(value)?;
                }
                Operator::Random => {
                    // gen yields [0, 1), the operator needs (0, 1].
                    let value: f64 = self.rng.gen();
                    stack.push(1.0 - value)?;
                }
            }
        }

        Ok(())
    }

    fn parse_path<F>(
        &mut self,
        stack: &mut ArgumentsStack<'_, f64>,
        parse: F,
    ) -> Result<(), CFFError>
    where
        F: FnOnce(&mut CharStringParser<'_>) -> Result<(), CFFError>,
    {
        parse(&mut CharStringParser::new(&mut self.builder, stack.all()))?;
        stack.clear();
        Ok(())
    }

    fn call_subroutine(
        &mut self,
        op: Operator,
        subrs: &'a [Vec<u8>],
        depth: u8,
        stack: &mut ArgumentsStack<'_, f64>,
    ) -> Result<(), CFFError> {
        if depth == STACK_LIMIT {
            return Err(CFFError::NestingLimitReached);
        }

        let subroutine_bias = calc_subroutine_bias(subrs.len());
        let index = conv_subroutine_index(stack.pop()?, subroutine_bias)?;
        let char_string = subrs.get(index).ok_or(CFFError::InvalidSubroutineIndex)?;
        trace!("{} {} at depth {}", op, index, depth + 1);
        self.visit(char_string, depth + 1, stack)
    }
}

fn read_instruction(s: &mut ReadCtxt<'_>) -> Result<Instruction, CFFError> {
    let b0 = s.read::<U8>()?;
    let instruction = match b0 {
        operator::SHORT_INT => Instruction::Operand(f64::from(s.read::<I16Be>()?)),
        32..=246 => Instruction::Operand(parse_int1(b0)),
        247..=250 => Instruction::Operand(parse_int2(b0, s)?),
        251..=254 => Instruction::Operand(parse_int3(b0, s)?),
        operator::FIXED_16_16 => Instruction::Operand(parse_fixed(s)?),
        TWO_BYTE_OPERATOR_MARK => {
            let b1 = s.read::<U8>()?;
            Instruction::Operator(Operator::from_escaped(b1)?)
        }
        _ => Instruction::Operator(Operator::try_from(b0)?),
    };
    Ok(instruction)
}

// CharString number parsing functions
fn parse_int1(op: u8) -> f64 {
    f64::from(i16::from(op) - 139)
}

fn parse_int2(op: u8, s: &mut ReadCtxt<'_>) -> Result<f64, CFFError> {
    let b1 = s.read::<U8>()?;
    let n = (i16::from(op) - 247) * 256 + i16::from(b1) + 108;
    debug_assert!((108..=1131).contains(&n));
    Ok(f64::from(n))
}

fn parse_int3(op: u8, s: &mut ReadCtxt<'_>) -> Result<f64, CFFError> {
    let b1 = s.read::<U8>()?;
    let n = -(i16::from(op) - 251) * 256 - i16::from(b1) - 108;
    debug_assert!((-1131..=-108).contains(&n));
    Ok(f64::from(n))
}

fn parse_fixed(s: &mut ReadCtxt<'_>) -> Result<f64, CFFError> {
    let n = s.read::<Fixed>()?;
    Ok(f64::from(n))
}

fn bool_operand(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

fn transient_index(value: f64) -> Result<i32, CFFError> {
    value
        .to_i32()
        .filter(|index| *index >= 0)
        .ok_or(CFFError::InvalidTransientIndex)
}

// Conversions from biased subr index operands to unbiased value
pub(crate) fn conv_subroutine_index(index: f64, bias: u16) -> Result<usize, CFFError> {
    let index = index.to_i32().ok_or(CFFError::InvalidSubroutineIndex)?;
    index
        .checked_add(i32::from(bias))
        .and_then(|index| usize::try_from(index).ok())
        .ok_or(CFFError::InvalidSubroutineIndex)
}

impl IsEven for usize {
    fn is_even(&self) -> bool {
        (*self) & 1 == 0
    }

    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

impl Operator {
    fn from_escaped(value: u8) -> Result<Self, CFFError> {
        let op = match value {
            operator::DOT_SECTION => Operator::DotSection,
            operator::AND => Operator::And,
            operator::OR => Operator::Or,
            operator::NOT => Operator::Not,
            operator::ABS => Operator::Abs,
            operator::ADD => Operator::Add,
            operator::SUB => Operator::Sub,
            operator::DIV => Operator::Div,
            operator::NEG => Operator::Neg,
            operator::EQ => Operator::Eq,
            operator::DROP => Operator::Drop,
            operator::PUT => Operator::Put,
            operator::GET => Operator::Get,
            operator::IF_ELSE => Operator::IfElse,
            operator::RANDOM => Operator::Random,
            operator::MUL => Operator::Mul,
            operator::SQRT => Operator::Sqrt,
            operator::DUP => Operator::Dup,
            operator::EXCH => Operator::Exch,
            operator::INDEX => Operator::Index,
            operator::ROLL => Operator::Roll,
            operator::HFLEX => Operator::Hflex,
            operator::FLEX => Operator::Flex,
            operator::HFLEX1 => Operator::Hflex1,
            operator::FLEX1 => Operator::Flex1,
            _ => return Err(CFFError::InvalidOperator(Some(TWO_BYTE_OPERATOR_MARK), value)),
        };
        Ok(op)
    }
}

impl TryFrom<u8> for Operator {
    type Error = CFFError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            operator::HORIZONTAL_STEM => Ok(Operator::HorizontalStem),
            operator::VERTICAL_STEM => Ok(Operator::VerticalStem),
            operator::VERTICAL_MOVE_TO => Ok(Operator::VerticalMoveTo),
            operator::LINE_TO => Ok(Operator::LineTo),
            operator::HORIZONTAL_LINE_TO => Ok(Operator::HorizontalLineTo),
            operator::VERTICAL_LINE_TO => Ok(Operator::VerticalLineTo),
            operator::CURVE_TO => Ok(Operator::CurveTo),
            operator::CALL_LOCAL_SUBROUTINE => Ok(Operator::CallLocalSubroutine),
            operator::RETURN => Ok(Operator::Return),
            operator::ENDCHAR => Ok(Operator::Endchar),
            operator::HORIZONTAL_STEM_HINT_MASK => Ok(Operator::HorizontalStemHintMask),
            operator::HINT_MASK => Ok(Operator::HintMask),
            operator::COUNTER_MASK => Ok(Operator::CounterMask),
            operator::MOVE_TO => Ok(Operator::MoveTo),
            operator::HORIZONTAL_MOVE_TO => Ok(Operator::HorizontalMoveTo),
            operator::VERTICAL_STEM_HINT_MASK => Ok(Operator::VerticalStemHintMask),
            operator::CURVE_LINE => Ok(Operator::CurveLine),
            operator::LINE_CURVE => Ok(Operator::LineCurve),
            operator::VV_CURVE_TO => Ok(Operator::VvCurveTo),
            operator::HH_CURVE_TO => Ok(Operator::HhCurveTo),
            operator::CALL_GLOBAL_SUBROUTINE => Ok(Operator::CallGlobalSubroutine),
            operator::VH_CURVE_TO => Ok(Operator::VhCurveTo),
            operator::HV_CURVE_TO => Ok(Operator::HvCurveTo),
            // Reserved, including the CFF2-only vsindex and blend.
            _ => Err(CFFError::InvalidOperator(None, value)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::HorizontalStem => f.write_str("hstem"),
            Operator::VerticalStem => f.write_str("vstem"),
            Operator::VerticalMoveTo => f.write_str("vmoveto"),
            Operator::LineTo => f.write_str("rlineto"),
            Operator::HorizontalLineTo => f.write_str("hlineto"),
            Operator::VerticalLineTo => f.write_str("vlineto"),
            Operator::CurveTo => f.write_str("rrcurveto"),
            Operator::CallLocalSubroutine => f.write_str("callsubr"),
            Operator::Return => f.write_str("return"),
            Operator::Endchar => f.write_str("endchar"),
            Operator::HorizontalStemHintMask => f.write_str("hstemhm"),
            Operator::HintMask => f.write_str("hintmask"),
            Operator::CounterMask => f.write_str("cntrmask"),
            Operator::MoveTo => f.write_str("rmoveto"),
            Operator::HorizontalMoveTo => f.write_str("hmoveto"),
            Operator::VerticalStemHintMask => f.write_str("vstemhm"),
            Operator::CurveLine => f.write_str("rcurveline"),
            Operator::LineCurve => f.write_str("rlinecurve"),
            Operator::VvCurveTo => f.write_str("vvcurveto"),
            Operator::HhCurveTo => f.write_str("hhcurveto"),
            Operator::CallGlobalSubroutine => f.write_str("callgsubr"),
            Operator::VhCurveTo => f.write_str("vhcurveto"),
            Operator::HvCurveTo => f.write_str("hvcurveto"),
            Operator::DotSection => f.write_str("dotsection"),
            Operator::And => f.write_str("and"),
            Operator::Or => f.write_str("or"),
            Operator::Not => f.write_str("not"),
            Operator::Abs => f.write_str("abs"),
            Operator::Add => f.write_str("add"),
            Operator::Sub => f.write_str("sub"),
            Operator::Div => f.write_str("div"),
            Operator::Neg => f.write_str("neg"),
            Operator::Eq => f.write_str("eq"),
            Operator::Drop => f.write_str("drop"),
            Operator::Put => f.write_str("put"),
            Operator::Get => f.write_str("get"),
            Operator::IfElse => f.write_str("ifelse"),
            Operator::Random => f.write_str("random"),
            Operator::Mul => f.write_str("mul"),
            Operator::Sqrt => f.write_str("sqrt"),
            Operator::Dup => f.write_str("dup"),
            Operator::Exch => f.write_str("exch"),
            Operator::Index => f.write_str("index"),
            Operator::Roll => f.write_str("roll"),
            Operator::Hflex => f.write_str("hflex"),
            Operator::Flex => f.write_str("flex"),
            Operator::Hflex1 => f.write_str("hflex1"),
            Operator::Flex1 => f.write_str("flex1"),
        }
    }
}

/// Operators defined in Adobe Technical Note #5177, The Type 2 Charstring Format.
pub(crate) mod operator {
    pub const HORIZONTAL_STEM: u8 = 1;
    pub const VERTICAL_STEM: u8 = 3;
    pub const VERTICAL_MOVE_TO: u8 = 4;
    pub const LINE_TO: u8 = 5;
    pub const HORIZONTAL_LINE_TO: u8 = 6;
    pub const VERTICAL_LINE_TO: u8 = 7;
    pub const CURVE_TO: u8 = 8;
    pub const CALL_LOCAL_SUBROUTINE: u8 = 10;
    pub const RETURN: u8 = 11;
    pub const ENDCHAR: u8 = 14;
    pub const HORIZONTAL_STEM_HINT_MASK: u8 = 18;
    pub const HINT_MASK: u8 = 19;
    pub const COUNTER_MASK: u8 = 20;
    pub const MOVE_TO: u8 = 21;
    pub const HORIZONTAL_MOVE_TO: u8 = 22;
    pub const VERTICAL_STEM_HINT_MASK: u8 = 23;
    pub const CURVE_LINE: u8 = 24;
    pub const LINE_CURVE: u8 = 25;
    pub const VV_CURVE_TO: u8 = 26;
    pub const HH_CURVE_TO: u8 = 27;
    pub const SHORT_INT: u8 = 28;
    pub const CALL_GLOBAL_SUBROUTINE: u8 = 29;
    pub const VH_CURVE_TO: u8 = 30;
    pub const HV_CURVE_TO: u8 = 31;
    pub const FIXED_16_16: u8 = 255;

    // Second byte of the two-byte operators
    pub const DOT_SECTION: u8 = 0;
    pub const AND: u8 = 3;
    pub const OR: u8 = 4;
    pub const NOT: u8 = 5;
    pub const ABS: u8 = 9;
    pub const ADD: u8 = 10;
    pub const SUB: u8 = 11;
    pub const DIV: u8 = 12;
    pub const NEG: u8 = 14;
    pub const EQ: u8 = 15;
    pub const DROP: u8 = 18;
    pub const PUT: u8 = 20;
    pub const GET: u8 = 21;
    pub const IF_ELSE: u8 = 22;
    pub const RANDOM: u8 = 23;
    pub const MUL: u8 = 24;
    pub const SQRT: u8 = 26;
    pub const DUP: u8 = 27;
    pub const EXCH: u8 = 28;
    pub const INDEX: u8 = 29;
    pub const ROLL: u8 = 30;
    pub const HFLEX: u8 = 34;
    pub const FLEX: u8 = 35;
    pub const HFLEX1: u8 = 36;
    pub const FLEX1: u8 = 37;
}
