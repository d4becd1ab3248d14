use std::fmt::Debug;

use crate::cff::CFFError;

/// Storage for the CFF operand stack when executing CharStrings.
pub struct ArgumentsStack<'a, T>
where
    T: Debug,
{
    pub data: &'a mut [T],
    pub len: usize,
    pub max_len: usize,
}

impl<'a, T> ArgumentsStack<'a, T>
where
    T: Copy + Debug,
{
    pub fn new(data: &'a mut [T]) -> Self {
        let max_len = data.len();
        ArgumentsStack {
            data,
            len: 0,
            max_len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, n: T) -> Result<(), CFFError> {
        if self.len == self.max_len {
            Err(CFFError::ArgumentsStackLimitReached)
        } else {
            self.data[self.len] = n;
            self.len += 1;
            Ok(())
        }
    }

    pub fn pop(&mut self) -> Result<T, CFFError> {
        if self.is_empty() {
            return Err(CFFError::StackUnderflow);
        }
        self.len -= 1;
        Ok(self.data[self.len])
    }

    /// The element `index` positions below the top of the stack, 0 being the top.
    pub fn peek(&self, index: usize) -> Result<T, CFFError> {
        if index < self.len {
            Ok(self.data[self.len - 1 - index])
        } else {
            Err(CFFError::StackUnderflow)
        }
    }

    pub fn all(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Rotate the top `n` elements towards the top of the stack by `shift` positions.
    pub fn roll(&mut self, n: usize, shift: usize) -> Result<(), CFFError> {
        if n > self.len {
            return Err(CFFError::StackUnderflow);
        }
        if n > 0 {
            self.data[self.len - n..self.len].rotate_right(shift % n);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Debug> Debug for ArgumentsStack<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(&self.data[..self.len]).finish()
    }
}
