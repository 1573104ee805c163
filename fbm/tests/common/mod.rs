//! Shared helpers for building backing files in tests

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use fbm::{MapConfig, MatrixDescriptor, MmapFbm, StorageType, Values};
use rand::Rng;
use tempfile::NamedTempFile;

/// Random values exactly representable in `ty`, carried as f64
pub fn random_values<R: Rng>(rng: &mut R, ty: StorageType, n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| match ty {
            StorageType::U8 => rng.gen::<u8>() as f64,
            StorageType::U16 => rng.gen::<u16>() as f64,
            StorageType::I32 => rng.gen::<i32>() as f64,
            StorageType::F64 => rng.gen_range(-1.0e6..1.0e6),
        })
        .collect()
}

/// Encode values as packed little-endian elements of `ty`
pub fn encode(ty: StorageType, values: &[f64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * ty.size_bytes());
    for &v in values {
        match ty {
            StorageType::U8 => bytes.push(v as u8),
            StorageType::U16 => bytes.extend_from_slice(&(v as u16).to_le_bytes()),
            StorageType::I32 => bytes.extend_from_slice(&(v as i32).to_le_bytes()),
            StorageType::F64 => bytes.extend_from_slice(&v.to_le_bytes()),
        }
    }
    bytes
}

/// Flatten extracted values to f64 for comparison, checking the kind
pub fn as_f64(values: &Values, ty: StorageType) -> Vec<f64> {
    assert_eq!(values.kind(), ty.output_kind());
    match values {
        Values::Integer(v) => v.iter().map(|&x| x as f64).collect(),
        Values::Real(v) => v.clone(),
    }
}

/// Write `bytes` to a fresh temporary file
pub fn backing_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write backing file");
    file.flush().expect("flush backing file");
    file
}

/// Map a temporary backing file holding `values` as an `nrow x ncol` matrix
pub fn mapped(
    ty: StorageType,
    nrow: usize,
    ncol: usize,
    values: &[f64],
) -> (NamedTempFile, MmapFbm) {
    let file = backing_file(&encode(ty, values));
    let fbm = open(file.path(), MatrixDescriptor::new(nrow, ncol, ty));
    (file, fbm)
}

pub fn open(path: &Path, descriptor: MatrixDescriptor) -> MmapFbm {
    MmapFbm::open(path, descriptor, &MapConfig::default()).expect("map backing file")
}
