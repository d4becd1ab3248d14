//! Shared test code.

include!("../tests/common.rs");

pub(crate) mod writer {
    //! Charstring assembly for tests.
    #![allow(dead_code)]

    use crate::cff::charstring::TWO_BYTE_OPERATOR_MARK;

    #[derive(Debug, Clone, Copy)]
    pub enum Type2 {
        /// Integer operand, in the shortest encoding.
        Int(i32),
        /// One-byte operator.
        Op(u8),
        /// Two-byte operator, given by its second byte.
        EscOp(u8),
        Raw(&'static [u8]),
    }

    pub fn convert(values: &[Type2]) -> Vec<u8> {
        let mut data = Vec::with_capacity(256);
        for v in values {
            convert_type(*v, &mut data);
        }

        data
    }

    pub fn convert_type(value: Type2, data: &mut Vec<u8>) {
        match value {
            Type2::Raw(bytes) => {
                data.extend_from_slice(bytes);
            }
            Type2::Op(op) => {
                data.push(op);
            }
            Type2::EscOp(op) => {
                data.push(TWO_BYTE_OPERATOR_MARK);
                data.push(op);
            }
            Type2::Int(n) => match n {
                -107..=107 => {
                    data.push((n as i16 + 139) as u8);
                }
                108..=1131 => {
                    let n = n - 108;
                    data.push(((n >> 8) + 247) as u8);
                    data.push((n & 0xFF) as u8);
                }
                -1131..=-108 => {
                    let n = -n - 108;
                    data.push(((n >> 8) + 251) as u8);
                    data.push((n & 0xFF) as u8);
                }
                -32768..=32767 => {
                    data.push(28);
                    data.extend_from_slice(&i16::to_be_bytes(n as i16));
                }
                _ => panic!("{} does not fit a charstring integer", n),
            },
        }
    }
}
