// 该文件是 Lianpu （脸谱） 项目的一部分。
// src/main.rs - 项目主程序
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

mod args;

use anyhow::Result;
use clap::Parser;

use lianpu::{
  detector::ScrfdDetector, input::DirectorySource, output::DirectoryOutput, task::BatchTask,
};
use tracing_subscriber::filter::EnvFilter;

fn main() -> Result<()> {
  // 日志走标准错误，进度输出走标准输出
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .init();

  let args = args::Args::parse();

  println!("Lianpu 人脸批量标注");
  println!("==================");
  println!("输入目录: {}", args.in_dir.display());
  println!("输出目录: {}", args.out_dir.display());
  println!("模型文件路径: {}", args.model_path.display());
  println!("检测概率阈值: {}", args.threshold);
  println!();

  // 先建输出目录，再加载模型
  let output = DirectoryOutput::new(&args.out_dir)?;

  println!("正在加载模型...");
  let detector = ScrfdDetector::from_path(&args.model_path, args.threshold)?;
  println!("模型加载完成");

  let source = DirectorySource::new(&args.in_dir)?;

  println!();
  println!("开始处理...");
  let report = BatchTask.run(source, &detector, &output)?;

  println!();
  println!("处理完成!");
  println!("图像总数: {}", report.images);
  println!("成功保存: {}", report.saved);
  println!("处理失败: {}", report.failed);
  println!("检测到人脸总数: {}", report.faces);

  Ok(())
}
