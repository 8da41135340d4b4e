//! Barcode symbol extraction

use std::collections::{HashMap, HashSet};

use image::DynamicImage;
use rxing::{BarcodeFormat, DecodeHintType, DecodeHintValue, DecodingHintDictionary};

/// Pulls a barcode payload out of a decoded image.
///
/// Seam for the scan pipeline; tests substitute a stub so the pipeline can be
/// exercised without real barcode imagery.
pub trait BarcodeExtractor: Send + Sync {
    fn extract(&self, image: &DynamicImage) -> Option<String>;
}

/// Retail symbologies accepted by the scanner (EAN / UPC family).
pub struct SymbolDecoder;

impl BarcodeExtractor for SymbolDecoder {
    fn extract(&self, image: &DynamicImage) -> Option<String> {
        let luma = image.to_luma8();
        let (width, height) = luma.dimensions();

        let mut hints: DecodingHintDictionary = HashMap::from([
            (
                DecodeHintType::POSSIBLE_FORMATS,
                DecodeHintValue::PossibleFormats(HashSet::from([
                    BarcodeFormat::EAN_13,
                    BarcodeFormat::EAN_8,
                    BarcodeFormat::UPC_A,
                    BarcodeFormat::UPC_E,
                ])),
            ),
            (DecodeHintType::TRY_HARDER, DecodeHintValue::TryHarder(true)),
        ]);

        rxing::helpers::detect_in_luma_with_hints(luma.into_raw(), height, width, None, &mut hints)
            .ok()
            .map(|result| result.getText().to_string())
    }
}
