//! # 이메일 서비스
//!
//! 비밀번호 재설정 메일의 내용 구성과 발송 트리거를 담당합니다.
//! 실제 전송은 `Mailer` trait 구현체에 위임하므로,
//! 전송 수단 교체나 테스트 시 녹화가 쉽습니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::config::EmailConfig;
use crate::core::AppResult;
use crate::services::auth::TokenService;

/// 발송 대기 중인 이메일 한 통
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// 발신자 주소
    pub from: String,
    /// 수신자 주소
    pub to: String,
    /// 제목
    pub subject: String,
    /// 본문 (평문)
    pub text: String,
}

/// 이메일 전송 수단 추상화
///
/// 운영 환경에서는 SMTP 게이트웨이 앞단의 구현체를,
/// 테스트에서는 녹화용 구현체를 주입합니다.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// 이메일 한 통 전송
    async fn send(&self, email: OutgoingEmail) -> AppResult<()>;
}

/// 로그로만 기록하는 기본 전송 구현체
///
/// SMTP 연동 전 개발/운영 초기 단계의 기본값입니다.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> AppResult<()> {
        info!(
            "이메일 발송: from={}, to={}, subject={}",
            email.from, email.to, email.subject
        );
        Ok(())
    }
}

/// 이메일 서비스
#[derive(Clone)]
pub struct EmailService {
    token_service: TokenService,
    config: EmailConfig,
    mailer: Arc<dyn Mailer>,
}

impl EmailService {
    /// 새 이메일 서비스 생성
    pub fn new(token_service: TokenService, config: EmailConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            token_service,
            config,
            mailer,
        }
    }

    /// 비밀번호 재설정 링크 발송
    ///
    /// 재설정 토큰을 서명해 링크에 담아 전송합니다.
    ///
    /// # 인자
    /// * `email` - 수신자이자 재설정 대상 이메일
    pub async fn send_reset_password_link(&self, email: &str) -> AppResult<()> {
        let token = self.token_service.issue_reset_token(email)?;
        let url = format!("{}?token={}", self.config.reset_password_url, token);

        self.mailer
            .send(OutgoingEmail {
                from: self.config.from.clone(),
                to: email.to_string(),
                subject: "Reset password".to_string(),
                text: format!("Hi, \nTo reset your password, click here: {}", url),
            })
            .await
    }
}

/// 전송된 메일을 녹화하는 테스트용 구현체
#[cfg(test)]
pub struct RecordingMailer {
    pub sent: std::sync::Mutex<Vec<OutgoingEmail>>,
}

#[cfg(test)]
impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> AppResult<()> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}
