use std::io;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use euclid::Angle;

use crate::error::Result;
use crate::point::PointList;
use crate::point_store::load_points;
use crate::visibility::visible_points;

/// Line-oriented query loop. Generic over the streams so whole sessions can
/// be scripted in tests.
pub struct Shell<R, W> {
    input: R,
    output: W,
    point_file: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, point_file: impl Into<PathBuf>) -> Self {
        Shell {
            input,
            output,
            point_file: point_file.into(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.run_query()?;
            if !self.prompt_try_again()? {
                return Ok(());
            }
        }
    }

    fn run_query(&mut self) -> io::Result<()> {
        let reference_id = self.prompt_in_range(
            "Please enter the point number (between 1 and 20 inclusive): ",
            |&id: &i32| (1..=20).contains(&id),
        )?;
        let half_width = self.prompt_in_range(
            "Please enter the angle (between 0 and 180 exclusive): ",
            |&degrees: &f32| 0.0 < degrees && degrees < 180.0,
        )?;
        let max_distance = self.prompt_in_range(
            "Please enter the distance (between 0 and 50 inclusive): ",
            |&distance: &f32| (0.0..=50.0).contains(&distance),
        )?;

        let visible = match self.query(reference_id, half_width, max_distance) {
            Ok(visible) => visible,
            Err(error) => {
                writeln!(self.output, "Error: {error}")?;
                PointList::new()
            }
        };
        writeln!(self.output, "Visible Points:")?;
        for point in &visible {
            writeln!(self.output, "{point}")?;
        }
        Ok(())
    }

    // reload fresh for every query; nothing is cached across queries
    fn query(
        &self,
        reference_id: i32,
        half_width_degrees: f32,
        max_distance: f32,
    ) -> Result<PointList> {
        let points = load_points(&self.point_file)?;
        visible_points(
            &points,
            reference_id,
            Angle::degrees(half_width_degrees),
            max_distance,
        )
    }

    fn prompt_in_range<T: FromStr>(
        &mut self,
        prompt: &str,
        in_range: impl Fn(&T) -> bool,
    ) -> io::Result<T> {
        self.show(prompt)?;
        loop {
            match self.read_trimmed_line()?.parse::<T>() {
                Ok(value) if in_range(&value) => return Ok(value),
                _ => {
                    self.show("Invalid input. ")?;
                    self.show(prompt)?;
                }
            }
        }
    }

    fn prompt_try_again(&mut self) -> io::Result<bool> {
        writeln!(self.output)?;
        self.show("Try another point? (y/n): ")?;
        loop {
            match self.read_trimmed_line()?.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.show("Invalid input. Try another point? (y/n): ")?,
            }
        }
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_trimmed_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed mid-prompt",
            ));
        }
        Ok(line.trim().to_owned())
    }
}
