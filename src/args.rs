// 该文件是 Lianpu （脸谱） 项目的一部分。
// src/args.rs - 项目参数配置
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::path::PathBuf;

use clap::Parser;

/// Lianpu 项目参数配置
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// 输入图像目录
  /// 支持格式: *.jpg, *.jpeg, *.png, *.bmp, *.webp, *.tif, *.tiff
  #[arg(long = "in_dir", value_name = "DIR", value_parser = parse_input_dir)]
  pub in_dir: PathBuf,

  /// 输出目录（不存在时自动创建，含父目录）
  #[arg(long = "out_dir", value_name = "DIR")]
  pub out_dir: PathBuf,

  /// SCRFD ONNX 模型文件路径
  #[arg(
    long = "model_path",
    default_value = "./models/scrfd.onnx",
    value_name = "FILE"
  )]
  pub model_path: PathBuf,

  /// 检测概率阈值 (0.0 - 1.0)
  #[arg(
    long,
    default_value = "0.4",
    value_name = "THRESHOLD",
    value_parser = parse_threshold
  )]
  pub threshold: f32,
}

fn parse_input_dir(value: &str) -> Result<PathBuf, String> {
  let path = PathBuf::from(value);
  if path.is_dir() {
    Ok(path)
  } else {
    Err(format!("输入目录不存在或不是目录: {}", value))
  }
}

fn parse_threshold(value: &str) -> Result<f32, String> {
  let threshold: f32 = value
    .parse()
    .map_err(|_| format!("无效的阈值: {}", value))?;
  if (0.0..=1.0).contains(&threshold) {
    Ok(threshold)
  } else {
    Err(format!("阈值必须在 0.0 到 1.0 之间: {}", value))
  }
}
