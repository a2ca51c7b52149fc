// 该文件是 Lianpu （脸谱） 项目的一部分。
// src/input/directory_source.rs - 目录图像源
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::path::{Path, PathBuf};

use image::ImageReader;
use tracing::info;

use super::{Frame, InputError, list_images};

/// 目录图像源
///
/// 枚举在构造时完成，解码推迟到迭代时逐张进行。
/// 单张图像解码失败只产出一个 `Err`，不会终止迭代。
pub struct DirectorySource {
  dir: PathBuf,
  paths: std::vec::IntoIter<PathBuf>,
  total: usize,
  index: u64,
}

impl DirectorySource {
  pub fn new(dir: &Path) -> Result<Self, InputError> {
    let paths = list_images(dir)?;
    let total = paths.len();
    info!("在 {} 中找到 {} 张图像", dir.display(), total);
    Ok(Self {
      dir: dir.to_path_buf(),
      paths: paths.into_iter(),
      total,
      index: 0,
    })
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  /// 枚举到的图像总数
  pub fn len(&self) -> usize {
    self.total
  }

  pub fn is_empty(&self) -> bool {
    self.total == 0
  }

  fn load(&self, path: &Path) -> Result<Frame, InputError> {
    let reader = ImageReader::open(path)
      .map_err(|err| InputError::Open(path.to_path_buf(), err))?
      // 按内容嗅探格式，避免误导性扩展名
      .with_guessed_format()
      .map_err(|err| InputError::Open(path.to_path_buf(), err))?;
    let image = reader
      .decode()
      .map_err(|err| InputError::Decode(path.to_path_buf(), err))?
      .into_rgb8();

    let name = path
      .file_name()
      .unwrap_or(path.as_os_str())
      .to_os_string();
    Ok(Frame {
      image,
      name,
      index: self.index,
    })
  }
}

impl Iterator for DirectorySource {
  type Item = Result<Frame, InputError>;

  fn next(&mut self) -> Option<Self::Item> {
    let path = self.paths.next()?;
    let item = self.load(&path);
    self.index += 1;
    Some(item)
  }
}
