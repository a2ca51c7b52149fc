// 该文件是 Lianpu （脸谱） 项目的一部分。
// src/detector.rs - SCRFD 人脸检测器
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;
use scrfd::{Scrfd, Threshold};
use tracing::{debug, info};

pub use scrfd::{Bbox, Face, FaceKeypoints, Point};

/// NMS 的 IoU 阈值，与上游 SCRFD 的默认值保持一致
const DEFAULT_NMS_IOU: f32 = 0.4;

/// 人脸检测器接口
pub trait FaceDetector {
  /// 在整幅图像上检测人脸，返回置信度不低于阈值的结果
  fn detect(&self, image: &RgbImage) -> Result<Vec<Face>>;
}

/// 基于 SCRFD 模型的人脸检测器
pub struct ScrfdDetector {
  model: Scrfd,
  threshold: Threshold,
}

impl ScrfdDetector {
  /// 从 ONNX 模型文件加载检测器
  ///
  /// `probability` 是检测概率阈值，取值范围 [0, 1]。
  pub fn from_path(model_path: &Path, probability: f32) -> Result<Self> {
    info!("加载模型文件: {}", model_path.display());
    let model_data = std::fs::read(model_path)
      .with_context(|| format!("无法读取模型文件: {}", model_path.display()))?;
    debug!(
      "模型文件大小: {:.2} MB",
      model_data.len() as f64 / (1024.0 * 1024.0)
    );
    let model = Scrfd::from_bytes(&model_data)
      .with_context(|| format!("无法加载模型: {}", model_path.display()))?;
    info!("模型加载完成");
    Ok(Self {
      model,
      threshold: Threshold {
        score: probability,
        iou: DEFAULT_NMS_IOU,
      },
    })
  }
}

impl FaceDetector for ScrfdDetector {
  fn detect(&self, image: &RgbImage) -> Result<Vec<Face>> {
    let faces = self
      .model
      .detect_with_threshold(image, self.threshold)
      .context("模型推理失败")?;
    Ok(faces)
  }
}
