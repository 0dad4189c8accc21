//! CPF(Cadastro de Pessoas Físicas) 식별자 검증
//!
//! CPF는 11자리 숫자로 구성되며 마지막 두 자리가 검증 숫자입니다.
//!
//! ## 검증 숫자 계산
//!
//! ```text
//! 첫 번째 검증 숫자: 앞 9자리 × 가중치 10..2 의 합을 11로 나눈 나머지 r
//!                    r < 2 이면 0, 아니면 11 - r
//! 두 번째 검증 숫자: 앞 10자리 × 가중치 11..2 로 동일하게 계산
//! ```
//!
//! 예: `123456789` → 검증 숫자 `09` → `12345678909`

/// 식별자 검증 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CpfRule {
    /// 정확히 11자리 숫자
    #[default]
    Format,
    /// 11자리 숫자 + 반복 숫자 거부 + 검증 숫자 확인
    Checksum,
}

impl CpfRule {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "checksum" | "strict" => CpfRule::Checksum,
            _ => CpfRule::Format,
        }
    }

    pub fn is_valid(&self, cpf: &str) -> bool {
        match self {
            CpfRule::Format => has_cpf_format(cpf),
            CpfRule::Checksum => has_valid_check_digits(cpf),
        }
    }
}

/// 정확히 11자리 ASCII 숫자인지 확인합니다.
pub fn has_cpf_format(cpf: &str) -> bool {
    cpf.len() == 11 && cpf.bytes().all(|b| b.is_ascii_digit())
}

/// 형식과 두 검증 숫자를 모두 확인합니다.
///
/// `00000000000`처럼 모든 자리가 같은 번호는 산술적으로는 통과하지만 거부합니다.
pub fn has_valid_check_digits(cpf: &str) -> bool {
    if !has_cpf_format(cpf) {
        return false;
    }

    let digits: Vec<u32> = cpf.bytes().map(|b| u32::from(b - b'0')).collect();
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

fn check_digit(digits: &[u32]) -> u32 {
    let first_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (first_weight - i as u32))
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
