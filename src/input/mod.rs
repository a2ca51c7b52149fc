// 该文件是 Lianpu （脸谱） 项目的一部分。
// src/input/mod.rs - 输入模块
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

mod directory_source;

pub use directory_source::DirectorySource;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::RgbImage;
use thiserror::Error;
use tracing::debug;

/// 支持的图像扩展名（不区分大小写）
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "webp", "tif", "tiff"];

#[derive(Error, Debug)]
pub enum InputError {
  #[error("输入目录不存在或不是目录: {}", .0.display())]
  NotADirectory(PathBuf),
  #[error("无法读取输入目录 {}: {}", .0.display(), .1)]
  ReadDir(PathBuf, std::io::Error),
  #[error("无法打开图像 {}: {}", .0.display(), .1)]
  Open(PathBuf, std::io::Error),
  #[error("无法解码图像 {}: {}", .0.display(), .1)]
  Decode(PathBuf, image::ImageError),
}

/// 帧数据
pub struct Frame {
  /// RGB 图像数据
  pub image: RgbImage,
  /// 源文件名（不含目录）
  pub name: OsString,
  /// 帧索引（按枚举顺序从 0 开始）
  pub index: u64,
}

/// 判断路径扩展名是否在支持列表中
pub fn is_supported(path: &Path) -> bool {
  if let Some(ext) = path.extension()
    && let Some(ext) = ext.to_str()
  {
    SUPPORTED_EXTENSIONS
      .iter()
      .any(|supported| ext.eq_ignore_ascii_case(supported))
  } else {
    false
  }
}

/// 列出目录中受支持的图像文件，按文件名字典序排序
///
/// 只枚举普通文件，不递归子目录。
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
  if !dir.is_dir() {
    return Err(InputError::NotADirectory(dir.to_path_buf()));
  }

  let entries =
    std::fs::read_dir(dir).map_err(|err| InputError::ReadDir(dir.to_path_buf(), err))?;

  let mut paths = Vec::new();
  let mut skipped = 0usize;
  for entry in entries {
    let entry = entry.map_err(|err| InputError::ReadDir(dir.to_path_buf(), err))?;
    let path = entry.path();
    if !path.is_file() {
      continue;
    }
    if is_supported(&path) {
      paths.push(path);
    } else {
      skipped += 1;
    }
  }

  if skipped > 0 {
    debug!("忽略 {} 个不支持的文件", skipped);
  }

  paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
  Ok(paths)
}
