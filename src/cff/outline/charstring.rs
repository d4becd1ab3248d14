//! Decomposition of the Type 2 path operators into line and curve segments.

use crate::cff::charstring::IsEven;
use crate::cff::outline::Builder;
use crate::cff::CFFError;

/// Consumes the operands of a single path operator from the bottom of the stack.
pub(crate) struct CharStringParser<'a> {
    builder: &'a mut Builder,
    args: &'a [f64],
    pos: usize,
}

impl<'a> CharStringParser<'a> {
    pub fn new(builder: &'a mut Builder, args: &'a [f64]) -> Self {
        CharStringParser {
            builder,
            args,
            pos: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.args.len() - self.pos
    }

    fn next(&mut self) -> Result<f64, CFFError> {
        let value = self
            .args
            .get(self.pos)
            .copied()
            .ok_or(CFFError::InvalidArgumentsStackLength)?;
        self.pos += 1;
        Ok(value)
    }

    fn expect_len(&self, len: usize) -> Result<(), CFFError> {
        if self.args.len() == len {
            Ok(())
        } else {
            Err(CFFError::InvalidArgumentsStackLength)
        }
    }

    fn line(&mut self, dx: f64, dy: f64) {
        self.builder.line_by(dx, dy);
    }

    fn curve(&mut self, dxa: f64, dya: f64, dxb: f64, dyb: f64, dxc: f64, dyc: f64) {
        self.builder.curve_by(dxa, dya, dxb, dyb, dxc, dyc);
    }

    pub fn parse_move_to(&mut self) -> Result<(), CFFError> {
        // width? dx1 dy1

        if self.args.len().is_odd() {
            self.pos += 1;
        }
        if self.remaining() != 2 {
            return Err(CFFError::InvalidArgumentsStackLength);
        }

        let dx = self.next()?;
        let dy = self.next()?;
        self.builder.move_by(dx, dy);
        Ok(())
    }

    pub fn parse_horizontal_move_to(&mut self) -> Result<(), CFFError> {
        // width? dx1

        let dx = self.parse_single_move()?;
        self.builder.move_by(dx, 0.0);
        Ok(())
    }

    pub fn parse_vertical_move_to(&mut self) -> Result<(), CFFError> {
        // width? dy1

        let dy = self.parse_single_move()?;
        self.builder.move_by(0.0, dy);
        Ok(())
    }

    fn parse_single_move(&mut self) -> Result<f64, CFFError> {
        if self.args.is_empty() {
            return Err(CFFError::StackUnderflow);
        }
        if self.args.len().is_even() {
            self.pos += 1;
        }
        if self.remaining() != 1 {
            return Err(CFFError::InvalidArgumentsStackLength);
        }
        self.next()
    }

    pub fn parse_line_to(&mut self) -> Result<(), CFFError> {
        // {dxa dya}+

        while self.remaining() > 0 {
            let dx = self.next()?;
            let dy = self.next()?;
            self.line(dx, dy);
        }
        Ok(())
    }

    pub fn parse_horizontal_line_to(&mut self) -> Result<(), CFFError> {
        // dx1 {dya dxb}*
        //     {dxa dyb}+

        while self.remaining() > 0 {
            let dx = self.next()?;
            self.line(dx, 0.0);
            if self.remaining() == 0 {
                break;
            }
            let dy = self.next()?;
            self.line(0.0, dy);
        }
        Ok(())
    }

    pub fn parse_vertical_line_to(&mut self) -> Result<(), CFFError> {
        // dy1 {dxa dyb}*
        //     {dya dxb}+

        while self.remaining() > 0 {
            let dy = self.next()?;
            self.line(0.0, dy);
            if self.remaining() == 0 {
                break;
            }
            let dx = self.next()?;
            self.line(dx, 0.0);
        }
        Ok(())
    }

    pub fn parse_curve_to(&mut self) -> Result<(), CFFError> {
        // {dxa dya dxb dyb dxc dyc}+

        if self.args.len() % 6 != 0 {
            return Err(CFFError::InvalidArgumentsStackLength);
        }

        while self.remaining() > 0 {
            self.parse_full_curve()?;
        }
        Ok(())
    }

    fn parse_full_curve(&mut self) -> Result<(), CFFError> {
        let dxa = self.next()?;
        let dya = self.next()?;
        let dxb = self.next()?;
        let dyb = self.next()?;
        let dxc = self.next()?;
        let dyc = self.next()?;
        self.curve(dxa, dya, dxb, dyb, dxc, dyc);
        Ok(())
    }

    pub fn parse_curve_line(&mut self) -> Result<(), CFFError> {
        // {dxa dya dxb dyb dxc dyc}+ dxd dyd

        while self.remaining() > 2 {
            self.parse_full_curve()?;
        }

        let dxd = self.next()?;
        let dyd = self.next()?;
        self.line(dxd, dyd);
        Ok(())
    }

    pub fn parse_line_curve(&mut self) -> Result<(), CFFError> {
        // {dxa dya}+ dxb dyb dxc dyc dxd dyd

        while self.remaining() > 6 {
            let dxa = self.next()?;
            let dya = self.next()?;
            self.line(dxa, dya);
        }

        self.parse_full_curve()
    }

    pub fn parse_hh_curve_to(&mut self) -> Result<(), CFFError> {
        // dy1? {dxa dxb dyb dxc}+

        // The odd argument count indicates a Y delta for the first curve.
        let mut dya = if self.args.len().is_odd() {
            self.next()?
        } else {
            0.0
        };

        if self.remaining() % 4 != 0 {
            return Err(CFFError::InvalidArgumentsStackLength);
        }

        while self.remaining() > 0 {
            let dxa = self.next()?;
            let dxb = self.next()?;
            let dyb = self.next()?;
            let dxc = self.next()?;
            self.curve(dxa, dya, dxb, dyb, dxc, 0.0);
            dya = 0.0;
        }
        Ok(())
    }

    pub fn parse_vv_curve_to(&mut self) -> Result<(), CFFError> {
        // dx1? {dya dxb dyb dyc}+

        // The odd argument count indicates an X delta for the first curve.
        let mut dxa = if self.args.len().is_odd() {
            self.next()?
        } else {
            0.0
        };

        if self.remaining() % 4 != 0 {
            return Err(CFFError::InvalidArgumentsStackLength);
        }

        while self.remaining() > 0 {
            let dya = self.next()?;
            let dxb = self.next()?;
            let dyb = self.next()?;
            let dyc = self.next()?;
            self.curve(dxa, dya, dxb, dyb, 0.0, dyc);
            dxa = 0.0;
        }
        Ok(())
    }

    // The last coordinate of a curve, present only when exactly one operand is left.
    fn trailing(&mut self) -> Result<f64, CFFError> {
        if self.remaining() == 1 {
            self.next()
        } else {
            Ok(0.0)
        }
    }

    // {dxa dxb dyb dyc dyd dxe dye dxf}: a horizontal-start curve then a vertical-start one.
    fn parse_hv_pair(&mut self) -> Result<(), CFFError> {
        let dxa = self.next()?;
        let dxb = self.next()?;
        let dyb = self.next()?;
        let dyc = self.next()?;
        let dyd = self.next()?;
        let dxe = self.next()?;
        let dye = self.next()?;
        let dxf = self.next()?;
        let dyf = self.trailing()?;
        self.curve(dxa, 0.0, dxb, dyb, 0.0, dyc);
        self.curve(0.0, dyd, dxe, dye, dxf, dyf);
        Ok(())
    }

    // {dya dxb dyb dxc dxd dxe dye dyf}: a vertical-start curve then a horizontal-start one.
    fn parse_vh_pair(&mut self) -> Result<(), CFFError> {
        let dya = self.next()?;
        let dxb = self.next()?;
        let dyb = self.next()?;
        let dxc = self.next()?;
        let dxd = self.next()?;
        let dxe = self.next()?;
        let dye = self.next()?;
        let dyf = self.next()?;
        let dxf = self.trailing()?;
        self.curve(0.0, dya, dxb, dyb, dxc, 0.0);
        self.curve(dxd, 0.0, dxe, dye, dxf, dyf);
        Ok(())
    }

    pub fn parse_hv_curve_to(&mut self) -> Result<(), CFFError> {
        // dx1 dx2 dy2 dy3 {dya dxb dyb dxc dxd dxe dye dyf}* dxf?
        //                 {dxa dxb dyb dyc dyd dxe dye dxf}+ dyf?

        if self.args.len() & 4 != 0 {
            let dxa = self.next()?;
            let dxb = self.next()?;
            let dyb = self.next()?;
            let dyc = self.next()?;
            let dxc = self.trailing()?;
            self.curve(dxa, 0.0, dxb, dyb, dxc, dyc);
            while self.remaining() > 0 {
                self.parse_vh_pair()?;
            }
        } else {
            while self.remaining() > 0 {
                self.parse_hv_pair()?;
            }
        }
        Ok(())
    }

    pub fn parse_vh_curve_to(&mut self) -> Result<(), CFFError> {
        // dy1 dx2 dy2 dx3 {dxa dxb dyb dyc dyd dxe dye dxf}* dyf?
        //                 {dya dxb dyb dxc dxd dxe dye dyf}+ dxf?

        if self.args.len() & 4 != 0 {
            let dya = self.next()?;
            let dxb = self.next()?;
            let dyb = self.next()?;
            let dxc = self.next()?;
            let dyc = self.trailing()?;
            self.curve(0.0, dya, dxb, dyb, dxc, dyc);
            while self.remaining() > 0 {
                self.parse_hv_pair()?;
            }
        } else {
            while self.remaining() > 0 {
                self.parse_vh_pair()?;
            }
        }
        Ok(())
    }

    pub fn parse_flex(&mut self) -> Result<(), CFFError> {
        // dx1 dy1 dx2 dy2 dx3 dy3 dx4 dy4 dx5 dy5 dx6 dy6 fd

        self.expect_len(13)?;
        self.parse_full_curve()?;
        self.parse_full_curve()?;
        // The flex depth only matters to renderers.
        let _fd = self.next()?;
        Ok(())
    }

    pub fn parse_hflex(&mut self) -> Result<(), CFFError> {
        // dx1 dx2 dy2 dx3 dx4 dx5 dx6

        self.expect_len(7)?;
        let dx1 = self.next()?;
        let dx2 = self.next()?;
        let dy2 = self.next()?;
        let dx3 = self.next()?;
        let dx4 = self.next()?;
        let dx5 = self.next()?;
        let dx6 = self.next()?;
        self.curve(dx1, 0.0, dx2, dy2, dx3, 0.0);
        self.curve(dx4, 0.0, dx5, -dy2, dx6, 0.0);
        Ok(())
    }

    pub fn parse_hflex1(&mut self) -> Result<(), CFFError> {
        // dx1 dy1 dx2 dy2 dx3 dx4 dx5 dy5 dx6

        self.expect_len(9)?;
        let dx1 = self.next()?;
        let dy1 = self.next()?;
        let dx2 = self.next()?;
        let dy2 = self.next()?;
        let dx3 = self.next()?;
        let dx4 = self.next()?;
        let dx5 = self.next()?;
        let dy5 = self.next()?;
        let dx6 = self.next()?;
        self.curve(dx1, dy1, dx2, dy2, dx3, 0.0);
        self.curve(dx4, 0.0, dx5, dy5, dx6, -(dy1 + dy2 + dy5));
        Ok(())
    }

    pub fn parse_flex1(&mut self) -> Result<(), CFFError> {
        // dx1 dy1 dx2 dy2 dx3 dy3 dx4 dy4 dx5 dy5 d6

        self.expect_len(11)?;
        let dx1 = self.next()?;
        let dy1 = self.next()?;
        let dx2 = self.next()?;
        let dy2 = self.next()?;
        let dx3 = self.next()?;
        let dy3 = self.next()?;
        let dx4 = self.next()?;
        let dy4 = self.next()?;
        let dx5 = self.next()?;
        let dy5 = self.next()?;
        let d6 = self.next()?;

        let dx = dx1 + dx2 + dx3 + dx4 + dx5;
        let dy = dy1 + dy2 + dy3 + dy4 + dy5;
        let (dx6, dy6) = if dx.abs() > dy.abs() {
            (d6, -dy)
        } else {
            (-dx, d6)
        };

        self.curve(dx1, dy1, dx2, dy2, dx3, dy3);
        self.curve(dx4, dy4, dx5, dy5, dx6, dy6);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cff::BBox;

    fn run<F>(args: &[f64], parse: F) -> Result<Builder, CFFError>
    where
        F: FnOnce(&mut CharStringParser<'_>) -> Result<(), CFFError>,
    {
        let mut builder = Builder::new();
        parse(&mut CharStringParser::new(&mut builder, args))?;
        Ok(builder)
    }

    #[test]
    fn move_to_width() {
        let builder = run(&[500.0, 10.0, 20.0], |p| p.parse_move_to()).unwrap();
        assert_eq!(builder.position(), (10.0, 20.0));

        let builder = run(&[10.0, 20.0], |p| p.parse_move_to()).unwrap();
        assert_eq!(builder.position(), (10.0, 20.0));

        let builder = run(&[500.0, 10.0], |p| p.parse_horizontal_move_to()).unwrap();
        assert_eq!(builder.position(), (10.0, 0.0));

        let builder = run(&[10.0], |p| p.parse_vertical_move_to()).unwrap();
        assert_eq!(builder.position(), (0.0, 10.0));
        assert_eq!(builder.bbox(), None);
    }

    #[test]
    fn move_to_bad_length() {
        assert!(matches!(
            run(&[1.0, 2.0, 3.0, 4.0], |p| p.parse_move_to()),
            Err(CFFError::InvalidArgumentsStackLength)
        ));
        assert!(matches!(
            run(&[], |p| p.parse_horizontal_move_to()),
            Err(CFFError::StackUnderflow)
        ));
        assert!(matches!(
            run(&[1.0, 2.0, 3.0], |p| p.parse_vertical_move_to()),
            Err(CFFError::InvalidArgumentsStackLength)
        ));
    }

    #[test]
    fn alternating_lines() {
        let builder = run(
            &[10.0, 20.0, -30.0],
            |p| p.parse_horizontal_line_to(),
        )
        .unwrap();
        assert_eq!(builder.position(), (-20.0, 20.0));
        assert_eq!(
            builder.bbox(),
            Some(BBox {
                x_min: -20.0,
                x_max: 10.0,
                y_min: 0.0,
                y_max: 20.0,
            })
        );

        let builder = run(&[10.0, 20.0], |p| p.parse_vertical_line_to()).unwrap();
        assert_eq!(builder.position(), (20.0, 10.0));
    }

    #[test]
    fn odd_line_to() {
        assert!(matches!(
            run(&[10.0, 20.0, 30.0], |p| p.parse_line_to()),
            Err(CFFError::InvalidArgumentsStackLength)
        ));
    }

    #[test]
    fn hh_curve_to() {
        let builder = run(
            &[5.0, 10.0, 10.0, 0.0, 10.0],
            |p| p.parse_hh_curve_to(),
        )
        .unwrap();
        assert_eq!(builder.position(), (30.0, 5.0));
    }

    #[test]
    fn vv_curve_to() {
        let builder = run(
            &[5.0, 10.0, 10.0, 0.0, 10.0, 10.0, 0.0, 0.0, 10.0],
            |p| p.parse_vv_curve_to(),
        )
        .unwrap();
        assert_eq!(builder.position(), (15.0, 40.0));
    }

    #[test]
    fn hv_curve_to() {
        // Four operands: one horizontal-start curve.
        let builder = run(&[10.0, 10.0, 10.0, 10.0], |p| p.parse_hv_curve_to()).unwrap();
        assert_eq!(builder.position(), (20.0, 20.0));

        // Five: the trailing operand is the final x delta.
        let builder = run(
            &[10.0, 10.0, 10.0, 10.0, 5.0],
            |p| p.parse_hv_curve_to(),
        )
        .unwrap();
        assert_eq!(builder.position(), (25.0, 20.0));

        // Eight: horizontal-start then vertical-start.
        let builder = run(
            &[10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0],
            |p| p.parse_hv_curve_to(),
        )
        .unwrap();
        assert_eq!(builder.position(), (40.0, 40.0));

        // Twelve: a lone curve followed by a vertical/horizontal pair.
        let builder = run(&[10.0; 12], |p| p.parse_hv_curve_to()).unwrap();
        assert_eq!(builder.position(), (60.0, 60.0));

        assert!(matches!(
            run(&[10.0; 6], |p| p.parse_hv_curve_to()),
            Err(CFFError::InvalidArgumentsStackLength)
        ));
    }

    #[test]
    fn vh_curve_to() {
        let builder = run(&[10.0, 10.0, 10.0, 10.0], |p| p.parse_vh_curve_to()).unwrap();
        assert_eq!(builder.position(), (20.0, 20.0));

        let builder = run(
            &[10.0, 10.0, 10.0, 10.0, 5.0],
            |p| p.parse_vh_curve_to(),
        )
        .unwrap();
        assert_eq!(builder.position(), (20.0, 25.0));

        let builder = run(&[10.0; 9], |p| p.parse_vh_curve_to()).unwrap();
        assert_eq!(builder.position(), (50.0, 40.0));
    }

    fn with_trailing(len: usize) -> Vec<f64> {
        let mut args = vec![10.0; len];
        args.push(5.0);
        args
    }

    fn bbox(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Option<BBox> {
        Some(BBox {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[test]
    fn hv_curve_to_trailing_operand() {
        // Lone curve, vertical/horizontal pair, then the last curve's final y delta.
        let builder = run(&with_trailing(12), |p| p.parse_hv_curve_to()).unwrap();
        assert_eq!(builder.position(), (65.0, 60.0));
        assert_eq!(builder.bbox(), bbox(0.0, 65.0, 0.0, 60.0));

        // Two horizontal/vertical pairs, the trailing operand ends the fourth curve.
        let builder = run(&with_trailing(16), |p| p.parse_hv_curve_to()).unwrap();
        assert_eq!(builder.position(), (80.0, 85.0));
        assert_eq!(builder.bbox(), bbox(0.0, 80.0, 0.0, 85.0));
    }

    #[test]
    fn vh_curve_to_trailing_operand() {
        let builder = run(&with_trailing(12), |p| p.parse_vh_curve_to()).unwrap();
        assert_eq!(builder.position(), (60.0, 65.0));
        assert_eq!(builder.bbox(), bbox(0.0, 60.0, 0.0, 65.0));

        let builder = run(&with_trailing(16), |p| p.parse_vh_curve_to()).unwrap();
        assert_eq!(builder.position(), (85.0, 80.0));
        assert_eq!(builder.bbox(), bbox(0.0, 85.0, 0.0, 80.0));
    }

    #[test]
    fn line_curve_with_several_lines() {
        let builder = run(
            &[
                10.0, 0.0, 0.0, 10.0, -30.0, 0.0, // lines
                0.0, 10.0, 20.0, 0.0, 10.0, -10.0, // curve
            ],
            |p| p.parse_line_curve(),
        )
        .unwrap();
        assert_eq!(builder.position(), (10.0, 10.0));
        let bounds = builder.bbox().unwrap();
        assert_eq!(bounds.x_min, -20.0);
        assert_eq!(bounds.x_max, 10.0);
        assert_eq!(bounds.y_min, 0.0);
        // Arch with control points at 20 peaks at 17.5.
        assert!((bounds.y_max - 17.5).abs() < 1e-9);
    }

    #[test]
    fn curve_line_and_line_curve() {
        let builder = run(
            &[0.0, 10.0, 10.0, 0.0, 10.0, 0.0, 5.0, 5.0],
            |p| p.parse_curve_line(),
        )
        .unwrap();
        assert_eq!(builder.position(), (25.0, 15.0));

        let builder = run(
            &[5.0, 5.0, 0.0, 10.0, 10.0, 0.0, 10.0, 0.0],
            |p| p.parse_line_curve(),
        )
        .unwrap();
        assert_eq!(builder.position(), (25.0, 15.0));

        assert!(matches!(
            run(&[1.0, 2.0, 3.0, 4.0, 5.0], |p| p.parse_line_curve()),
            Err(CFFError::InvalidArgumentsStackLength)
        ));
    }

    #[test]
    fn flex_variants_return_to_start_height() {
        let builder = run(
            &[10.0, 0.0, 10.0, 5.0, 10.0, 0.0, 10.0, 0.0, 10.0, -5.0, 10.0, 0.0, 50.0],
            |p| p.parse_flex(),
        )
        .unwrap();
        assert_eq!(builder.position(), (60.0, 0.0));

        let builder = run(
            &[10.0, 10.0, 5.0, 10.0, 10.0, 10.0, 10.0],
            |p| p.parse_hflex(),
        )
        .unwrap();
        assert_eq!(builder.position(), (60.0, 0.0));

        let builder = run(
            &[10.0, 2.0, 10.0, 3.0, 10.0, 10.0, 10.0, -1.0, 10.0],
            |p| p.parse_hflex1(),
        )
        .unwrap();
        assert_eq!(builder.position(), (60.0, 0.0));

        // Mostly horizontal: d6 is the last x delta, y returns to the start.
        let builder = run(
            &[10.0, 1.0, 10.0, 2.0, 10.0, 0.0, 10.0, 0.0, 10.0, -1.0, 7.0],
            |p| p.parse_flex1(),
        )
        .unwrap();
        assert_eq!(builder.position(), (57.0, 0.0));

        // Mostly vertical: d6 is the last y delta, x returns to the start.
        let builder = run(
            &[1.0, 10.0, 2.0, 10.0, 0.0, 10.0, 0.0, 10.0, -1.0, 10.0, 7.0],
            |p| p.parse_flex1(),
        )
        .unwrap();
        assert_eq!(builder.position(), (0.0, 57.0));

        assert!(matches!(
            run(&[0.0; 12], |p| p.parse_flex()),
            Err(CFFError::InvalidArgumentsStackLength)
        ));
    }
}
