// 该文件是 Lianpu （脸谱） 项目的一部分。
// src/output/mod.rs - 输出模块
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

mod draw;

pub use draw::Draw;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::detector::Face;
use crate::input::Frame;

#[derive(Error, Debug)]
pub enum OutputError {
  #[error("无法创建输出目录 {}: {}", .0.display(), .1)]
  CreateDir(PathBuf, std::io::Error),
  #[error("无法保存图像 {}: {}", .0.display(), .1)]
  Save(PathBuf, image::ImageError),
}

/// 目录输出
///
/// 标注后的图像以原文件名写入输出目录。
pub struct DirectoryOutput {
  out_dir: PathBuf,
  draw: Draw,
}

impl DirectoryOutput {
  /// 创建输出目录（含父目录），已存在则复用
  pub fn new(out_dir: &Path) -> Result<Self, OutputError> {
    std::fs::create_dir_all(out_dir)
      .map_err(|err| OutputError::CreateDir(out_dir.to_path_buf(), err))?;
    Ok(Self {
      out_dir: out_dir.to_path_buf(),
      draw: Draw::default(),
    })
  }

  /// 标注并保存一帧图像
  pub fn write_frame(&self, frame: Frame, faces: &[Face]) -> Result<(), OutputError> {
    let Frame { mut image, name, .. } = frame;
    self.draw.draw_faces(&mut image, faces);

    let path = self.out_dir.join(&name);
    image
      .save(&path)
      .map_err(|err| OutputError::Save(path.clone(), err))?;
    debug!("保存图像到: {}", path.display());
    Ok(())
  }
}
