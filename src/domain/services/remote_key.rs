//! # Remote Key Service
//!
//! オブジェクトキー導出サービス

/// オブジェクトキー導出サービス
///
/// ローカルのファイル名と宛先プレフィックスから、バケット内のオブジェクトキーを組み立てる。
/// オブジェクトキーはホストのパス区切りとは無関係に、常に `/` 区切りの文字列となる。
pub struct RemoteKeyService;

impl RemoteKeyService {
    /// 宛先プレフィックスとファイル名を結合してオブジェクトキーを返します。
    ///
    /// プレフィックスの `\` は `/` に正規化され、空のセグメントと `.` は取り除かれます。
    /// 先頭に `/` が付くことはありません。
    /// ファイル名は単一のパス要素なのでそのまま使います（Unix では `\` もファイル名の一部）。
    ///
    /// # 例
    ///
    /// ```
    /// use bucketpush::domain::services::remote_key::RemoteKeyService;
    ///
    /// assert_eq!(RemoteKeyService::derive("photos", "a.txt"), "photos/a.txt");
    /// assert_eq!(RemoteKeyService::derive("photos/2024/", "a.txt"), "photos/2024/a.txt");
    /// assert_eq!(RemoteKeyService::derive("", "a.txt"), "a.txt");
    /// ```
    pub fn derive(destination_prefix: &str, file_name: &str) -> String {
        let mut segments: Vec<&str> = Self::segments(destination_prefix).collect();
        segments.push(file_name);
        segments.join("/")
    }

    fn segments(path: &str) -> impl Iterator<Item = &str> {
        path.split(['/', '\\'])
            .filter(|segment| !segment.is_empty() && *segment != ".")
    }
}
