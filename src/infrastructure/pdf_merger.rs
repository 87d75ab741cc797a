//! PDF 合并器 - 基础设施层
//!
//! 唯一接触 PDF 结构的模块，只暴露"按顺序合并并写出"的能力，
//! 不认识学期 / 测验

use crate::error::{SorterError, SorterResult};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// 可以从父节点继承的页面属性
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// 合并多个 PDF 到 `output_path`
///
/// 输入为空时直接失败且不产生任何文件；其余任何错误都会被记录并返回 `false`
pub fn merge_pdfs(pdf_paths: &[PathBuf], output_path: &Path) -> bool {
    match try_merge(pdf_paths, output_path) {
        Ok(page_count) => {
            debug!(
                "合并完成: {} 个文件, {} 页 -> {}",
                pdf_paths.len(),
                page_count,
                output_path.display()
            );
            true
        }
        Err(SorterError::EmptyInput) => false,
        Err(e) => {
            error!("  Error merging PDFs: {}", e);
            false
        }
    }
}

/// 合并并写出，返回总页数
pub fn try_merge(pdf_paths: &[PathBuf], output_path: &Path) -> SorterResult<usize> {
    if pdf_paths.is_empty() {
        return Err(SorterError::EmptyInput);
    }

    let mut merger = PdfMerger::new();
    for path in pdf_paths {
        merger.append(path)?;
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|source| SorterError::DirectoryCreateFailed {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    merger.write(output_path)
}

/// 内存中的合并对象
///
/// 每个输入文件的对象编号会整体平移，避免与已合并的对象冲突
struct PdfMerger {
    objects: BTreeMap<ObjectId, Object>,
    pages: Vec<ObjectId>,
    /// 每个输入文件大纲的 (First, Last, Count)
    outlines: Vec<(ObjectId, ObjectId, i64)>,
    next_id: u32,
}

impl PdfMerger {
    fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            pages: Vec::new(),
            outlines: Vec::new(),
            next_id: 1,
        }
    }

    /// 追加一个 PDF 的所有页面
    fn append(&mut self, path: &Path) -> SorterResult<()> {
        let mut doc = Document::load(path).map_err(|e| SorterError::pdf_load_failed(path, e))?;
        // 只设了所有者密码的文件用空用户密码即可解密；需要真实用户密码的文件在此失败
        if doc.is_encrypted() {
            doc.decrypt("")
                .map_err(|e| SorterError::pdf_load_failed(path, e))?;
        }
        doc.renumber_objects_with(self.next_id);
        self.next_id = doc.max_id + 1;

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        if page_ids.is_empty() {
            return Err(SorterError::pdf_malformed(path, "no pages"));
        }

        // 页面会挂到新的页面树下，先把从旧父节点继承的属性展开到页面自身
        let mut flattened = Vec::with_capacity(page_ids.len());
        for page_id in &page_ids {
            let dict = flatten_page(&doc, *page_id)
                .map_err(|e| SorterError::pdf_malformed(path, e.to_string()))?;
            flattened.push((*page_id, dict));
        }

        if let Some(outline) = outline_bounds(&doc) {
            self.outlines.push(outline);
        }

        for (id, object) in doc.objects {
            if !is_page_tree_node(&object) {
                self.objects.insert(id, object);
            }
        }
        for (page_id, dict) in flattened {
            self.objects.insert(page_id, Object::Dictionary(dict));
            self.pages.push(page_id);
        }

        debug!("已追加 {}: {} 页", path.display(), page_ids.len());
        Ok(())
    }

    /// 构建新的页面树和目录并写出
    fn write(self, output_path: &Path) -> SorterResult<usize> {
        let page_count = self.pages.len();
        let mut doc = Document::with_version("1.5");
        doc.objects = self.objects;
        doc.max_id = self.next_id - 1;

        let pages_id = doc.new_object_id();
        let kids: Vec<Object> = self.pages.iter().map(|id| Object::Reference(*id)).collect();

        for page_id in &self.pages {
            if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(*page_id) {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Kids", Object::Array(kids));
        pages.set("Count", Object::Integer(page_count as i64));
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        if !self.outlines.is_empty() {
            let outlines_id = link_outlines(&mut doc, &self.outlines);
            catalog.set("Outlines", Object::Reference(outlines_id));
        }
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        // 覆盖已存在的同名文件
        doc.save(output_path)
            .map_err(|source| SorterError::PdfWriteFailed {
                path: output_path.to_path_buf(),
                source,
            })?;

        Ok(page_count)
    }
}

/// 旧文档的页面树节点、目录和大纲根节点不再需要；大纲条目保留
fn is_page_tree_node(object: &Object) -> bool {
    let Ok(dict) = object.as_dict() else {
        return false;
    };
    matches!(
        dict.get(b"Type").and_then(Object::as_name),
        Ok(b"Catalog" | b"Pages" | b"Page" | b"Outlines")
    )
}

/// 读取文档大纲根节点的第一个 / 最后一个顶层条目和可见条目数
fn outline_bounds(doc: &Document) -> Option<(ObjectId, ObjectId, i64)> {
    let root_id = doc.trailer.get(b"Root").and_then(Object::as_reference).ok()?;
    let catalog = doc.get_dictionary(root_id).ok()?;
    let outlines_id = catalog.get(b"Outlines").and_then(Object::as_reference).ok()?;
    let outlines = doc.get_dictionary(outlines_id).ok()?;

    let first = outlines.get(b"First").and_then(Object::as_reference).ok()?;
    let last = outlines.get(b"Last").and_then(Object::as_reference).ok()?;
    let count = outlines
        .get(b"Count")
        .and_then(Object::as_i64)
        .map(i64::abs)
        .unwrap_or(0);

    Some((first, last, count))
}

/// 把各文件的顶层大纲条目依次串到一个新的大纲根节点下，返回根节点编号
fn link_outlines(doc: &mut Document, outlines: &[(ObjectId, ObjectId, i64)]) -> ObjectId {
    let root_id = doc.new_object_id();

    for (index, (first, _, _)) in outlines.iter().enumerate() {
        // 顶层兄弟条目全部改挂到新根节点
        let mut current = Some(*first);
        let mut guard = 0;
        while let Some(item_id) = current {
            if guard > 10_000 {
                break;
            }
            guard += 1;

            let Ok(Object::Dictionary(item)) = doc.get_object_mut(item_id) else {
                break;
            };
            item.set("Parent", Object::Reference(root_id));
            current = item.get(b"Next").and_then(Object::as_reference).ok();
        }

        if index > 0 {
            let prev_last = outlines[index - 1].1;
            if let Ok(Object::Dictionary(item)) = doc.get_object_mut(prev_last) {
                item.set("Next", Object::Reference(*first));
            }
            if let Ok(Object::Dictionary(item)) = doc.get_object_mut(*first) {
                item.set("Prev", Object::Reference(prev_last));
            }
        }
    }

    let total: i64 = outlines.iter().map(|(_, _, count)| count).sum();
    let mut root = Dictionary::new();
    root.set("Type", Object::Name(b"Outlines".to_vec()));
    root.set("First", Object::Reference(outlines[0].0));
    root.set("Last", Object::Reference(outlines[outlines.len() - 1].1));
    root.set("Count", Object::Integer(total));
    doc.objects.insert(root_id, Object::Dictionary(root));

    root_id
}

/// 复制页面字典，并补全沿父链继承的属性
fn flatten_page(doc: &Document, page_id: ObjectId) -> lopdf::Result<Dictionary> {
    let mut page = doc.get_dictionary(page_id)?.clone();

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    // 防止损坏文件中出现循环引用
    let mut depth = 0;
    while let Some(parent_id) = parent {
        if depth > 64 {
            break;
        }
        depth += 1;

        let Ok(node) = doc.get_dictionary(parent_id) else {
            break;
        };
        for key in INHERITABLE_KEYS {
            if !page.has(key) {
                if let Ok(value) = node.get(key) {
                    page.set(key.to_vec(), value.clone());
                }
            }
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    Ok(page)
}
