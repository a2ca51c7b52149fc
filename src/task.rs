// 该文件是 Lianpu （脸谱） 项目的一部分。
// src/task.rs - 批量处理任务
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use anyhow::Result;
use tracing::{debug, error, info};

use crate::detector::FaceDetector;
use crate::input::DirectorySource;
use crate::output::DirectoryOutput;

/// 批量处理统计
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchReport {
  /// 枚举到的图像总数
  pub images: usize,
  /// 成功标注并保存的图像数
  pub saved: usize,
  /// 处理失败（读取、检测或保存）的图像数
  pub failed: usize,
  /// 检测到的人脸总数
  pub faces: usize,
}

pub struct BatchTask;

impl BatchTask {
  /// 逐张处理目录中的图像
  ///
  /// 单张图像失败只记录日志并继续，输入目录为空则返回错误。
  pub fn run(
    self,
    source: DirectorySource,
    detector: &dyn FaceDetector,
    output: &DirectoryOutput,
  ) -> Result<BatchReport> {
    if source.is_empty() {
      anyhow::bail!("在 {} 中未找到图像", source.dir().display());
    }

    let total = source.len();
    info!("开始批量处理，共 {} 张图像", total);

    let mut report = BatchReport {
      images: total,
      ..BatchReport::default()
    };
    for item in source {
      let frame = match item {
        Ok(frame) => frame,
        Err(err) => {
          error!("{}", err);
          report.failed += 1;
          continue;
        }
      };
      let name = frame.name.to_string_lossy().into_owned();
      info!("处理图像 ({}/{}): {}", frame.index + 1, total, name);

      let faces = match detector.detect(&frame.image) {
        Ok(faces) => faces,
        Err(err) => {
          error!("检测失败 {}: {:#}", name, err);
          report.failed += 1;
          continue;
        }
      };
      debug!("检测到 {} 张人脸", faces.len());
      for face in &faces {
        debug!(
          "人脸 {:.1}% 位于 ({:.0}, {:.0}) - ({:.0}, {:.0})",
          face.probability * 100.0,
          face.bbox.upper_left.x,
          face.bbox.upper_left.y,
          face.bbox.lower_right.x,
          face.bbox.lower_right.y
        );
      }
      report.faces += faces.len();

      match output.write_frame(frame, &faces) {
        Ok(()) => report.saved += 1,
        Err(err) => {
          error!("保存失败 {}: {}", name, err);
          report.failed += 1;
        }
      }
    }

    info!(
      "批量处理完成: 成功 {} / 失败 {} / 共 {}",
      report.saved, report.failed, report.images
    );
    Ok(report)
  }
}
