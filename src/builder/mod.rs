use image::{Rgb, RgbImage};
use tracing::debug;

use crate::common::error::{InvalidArgument, QrStyleResult};
use crate::encoder::{EcLevel, Encoder, QrcodeEncoder};
use crate::render::logo::{overlay, LogoOverlay};
use crate::render::render;
use crate::style::{DotPlacement, StyleParameters, DEFAULT_EC_LEVEL};

pub struct QrStyleBuilder<'a> {
    text: &'a str,
    ec_level: EcLevel,
    style: StyleParameters,
    logo: Option<&'a LogoOverlay>,
}

impl<'a> QrStyleBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, ec_level: DEFAULT_EC_LEVEL, style: StyleParameters::default(), logo: None }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn ec_level(&mut self, ec_level: EcLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn style(&mut self, style: StyleParameters) -> &mut Self {
        self.style = style;
        self
    }

    pub fn dot_color(&mut self, color: Rgb<u8>) -> &mut Self {
        self.style.dot_color = color;
        self
    }

    pub fn background_color(&mut self, color: Rgb<u8>) -> &mut Self {
        self.style.background_color = color;
        self
    }

    pub fn dot_radius(&mut self, radius: f32) -> &mut Self {
        self.style.dot_radius = radius;
        self
    }

    pub fn size(&mut self, size: u32) -> &mut Self {
        self.style.output_size = size;
        self
    }

    pub fn placement(&mut self, placement: DotPlacement) -> &mut Self {
        self.style.placement = placement;
        self
    }

    pub fn antialias(&mut self, antialias: bool) -> &mut Self {
        self.style.antialias = antialias;
        self
    }

    pub fn logo(&mut self, logo: &'a LogoOverlay) -> &mut Self {
        self.logo = Some(logo);
        self
    }

    pub fn unset_logo(&mut self) -> &mut Self {
        self.logo = None;
        self
    }

    pub fn style_params(&self) -> &StyleParameters {
        &self.style
    }

    /// Colors differ from black on white or a logo is set.
    pub fn is_customized(&self) -> bool {
        self.style.has_custom_colors() || self.logo.is_some()
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Ec level: {:?}, Style: {}, Logo: {} }}",
            self.ec_level,
            self.style,
            match self.logo {
                Some(l) => format!("{}x{}", l.source_width(), l.source_height()),
                None => "None".to_string(),
            }
        )
    }
}


// Build
//------------------------------------------------------------------------------

impl QrStyleBuilder<'_> {
    /// Encodes the text with the `qrcode` crate and renders it.
    ///
    /// With [`DotPlacement::Scaled`] the symbol is handed over unscaled, one
    /// cell per module, otherwise it is magnified to the canvas size.
    pub fn build(&self) -> QrStyleResult<RgbImage> {
        let encoder = match self.style.placement {
            DotPlacement::MatrixIndex => QrcodeEncoder::default(),
            DotPlacement::Scaled => QrcodeEncoder::unscaled(),
        };
        self.build_with(&encoder)
    }

    pub fn build_with<E: Encoder + ?Sized>(&self, encoder: &E) -> QrStyleResult<RgbImage> {
        debug!("Generating QR {}", self.metadata());

        if self.text.is_empty() {
            return Err(InvalidArgument::EmptyText.into());
        }
        self.style.validate()?;

        debug!("Encoding text...");
        let matrix = encoder.encode(self.text, self.ec_level, self.style.output_size)?;

        debug!("Rendering dots...");
        let mut image = render(&matrix, &self.style)?;

        if let Some(logo) = self.logo {
            debug!("Compositing logo...");
            overlay(&mut image, logo, self.style.output_size);
        }

        debug!("QR generated: {}x{}", image.width(), image.height());
        Ok(image)
    }
}
