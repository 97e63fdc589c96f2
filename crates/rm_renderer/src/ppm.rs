//! Plain-text PPM ("P3") image output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rm_math::IVec3;

use crate::renderer::ImageBuffer;

/// How channel values outside [0, 255] are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelPolicy {
    /// Write the averaged values as they are. A head-on surface can reach 256.
    #[default]
    Raw,
    /// Clamp every channel into [0, 255].
    Clamp,
}

impl ChannelPolicy {
    fn apply(self, color: IVec3) -> IVec3 {
        match self {
            ChannelPolicy::Raw => color,
            ChannelPolicy::Clamp => color.clamp(IVec3::ZERO, IVec3::splat(255)),
        }
    }
}

/// Write an image as P3 text: a three-line header, then one `R G B` line per
/// pixel in buffer order.
///
/// The header reports the buffer's own dimensions, i.e. the rows that were
/// actually rendered.
pub fn write_ppm<W: Write>(
    writer: &mut W,
    image: &ImageBuffer,
    policy: ChannelPolicy,
) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    let mut out_of_range = 0usize;
    for &pixel in &image.pixels {
        if pixel.cmplt(IVec3::ZERO).any() || pixel.cmpgt(IVec3::splat(255)).any() {
            out_of_range += 1;
        }
        let color = policy.apply(pixel);
        writeln!(writer, "{} {} {}", color.x, color.y, color.z)?;
    }

    if out_of_range > 0 {
        match policy {
            ChannelPolicy::Raw => log::warn!(
                "{} pixels have channels outside [0, 255] and were written unclamped",
                out_of_range
            ),
            ChannelPolicy::Clamp => log::debug!("Clamped {} pixels", out_of_range),
        }
    }

    Ok(())
}

/// Save an image to a PPM file.
pub fn save_ppm<P: AsRef<Path>>(
    path: P,
    image: &ImageBuffer,
    policy: ChannelPolicy,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, image, policy)?;
    writer.flush()
}
